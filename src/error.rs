//! Error types for surface generation and puzzle operations

use std::fmt;

/// Errors that can occur during surface generation or puzzle operations
#[derive(Debug, Clone)]
pub enum SweeperError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Requested tile ID does not exist
    TileNotFound(usize),
}

impl fmt::Display for SweeperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweeperError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            SweeperError::TileNotFound(id) => write!(f, "tile not found: {}", id),
        }
    }
}

impl std::error::Error for SweeperError {}

/// Result type alias for sweeper operations
pub type Result<T> = std::result::Result<T, SweeperError>;
