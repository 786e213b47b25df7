//! Color mapping for tile puzzle states

use crate::tile::GameTile;

/// RGBA color type
pub type TileColor = [f32; 4];

/// Trait for mapping a tile's puzzle state to a color
pub trait TileColorMapper {
    /// Map a tile's current puzzle state to an RGBA color
    fn map_color(&self, tile: &GameTile) -> TileColor;
}

/// Classic minesweeper palette keyed on puzzle state
///
/// Hidden tiles are slate, flagged tiles amber, revealed mines red, and
/// revealed safe tiles darken with their adjacent-mine count.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicColorMapper;

impl TileColorMapper for ClassicColorMapper {
    fn map_color(&self, tile: &GameTile) -> TileColor {
        if tile.is_revealed && tile.is_mine {
            return [0.80, 0.15, 0.10, 1.0]; // Exploded red
        }
        if !tile.is_revealed {
            if tile.is_flagged {
                return [0.95, 0.70, 0.20, 1.0]; // Flag amber
            }
            return [0.35, 0.40, 0.45, 1.0]; // Hidden slate
        }
        // Revealed safe tile, shaded by adjacent count
        let t = (tile.adjacent_mines as f32 / 8.0).min(1.0);
        [0.88 - 0.45 * t, 0.88 - 0.30 * t, 0.92 - 0.55 * t, 1.0]
    }
}

/// Custom color mapper with explicit per-state colors
///
/// Unlike [`ClassicColorMapper`], revealed safe tiles get a single color
/// regardless of their adjacent-mine count.
#[derive(Debug, Clone)]
pub struct CustomColorMapper {
    pub hidden: TileColor,
    pub flagged: TileColor,
    pub revealed: TileColor,
    pub exploded: TileColor,
}

impl Default for CustomColorMapper {
    fn default() -> Self {
        Self {
            hidden: [0.35, 0.40, 0.45, 1.0],
            flagged: [0.95, 0.70, 0.20, 1.0],
            revealed: [0.88, 0.88, 0.92, 1.0],
            exploded: [0.80, 0.15, 0.10, 1.0],
        }
    }
}

impl TileColorMapper for CustomColorMapper {
    fn map_color(&self, tile: &GameTile) -> TileColor {
        if tile.is_revealed && tile.is_mine {
            self.exploded
        } else if tile.is_revealed {
            self.revealed
        } else if tile.is_flagged {
            self.flagged
        } else {
            self.hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn tile() -> GameTile {
        GameTile {
            id: 0,
            center: Vec3::X,
            normal: Vec3::X,
            vertices: Vec::new(),
            neighbors: Vec::new(),
            sides: 6,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines: 0,
        }
    }

    #[test]
    fn test_classic_states_distinct() {
        let mapper = ClassicColorMapper;

        let hidden = mapper.map_color(&tile());

        let mut flagged = tile();
        flagged.is_flagged = true;

        let mut exploded = tile();
        exploded.is_mine = true;
        exploded.is_revealed = true;

        assert_ne!(hidden, mapper.map_color(&flagged));
        assert_ne!(hidden, mapper.map_color(&exploded));
        // Exploded mines read red.
        assert!(mapper.map_color(&exploded)[0] > mapper.map_color(&exploded)[1]);
    }

    #[test]
    fn test_classic_shades_by_count() {
        let mapper = ClassicColorMapper;

        let mut zero = tile();
        zero.is_revealed = true;

        let mut six = tile();
        six.is_revealed = true;
        six.adjacent_mines = 6;

        assert!(mapper.map_color(&six)[0] < mapper.map_color(&zero)[0]);
    }

    #[test]
    fn test_flag_hidden_by_reveal() {
        // A revealed tile's stale flag must not influence its color.
        let mapper = ClassicColorMapper;

        let mut revealed = tile();
        revealed.is_revealed = true;

        let mut revealed_flagged = revealed.clone();
        revealed_flagged.is_flagged = true;

        assert_eq!(
            mapper.map_color(&revealed),
            mapper.map_color(&revealed_flagged)
        );
    }

    #[test]
    fn test_custom_mapper() {
        let custom = CustomColorMapper {
            hidden: [0.0, 0.2, 0.5, 1.0],
            ..Default::default()
        };
        assert_eq!(custom.map_color(&tile()), [0.0, 0.2, 0.5, 1.0]);
    }
}
