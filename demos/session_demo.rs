//! Demonstration of board generation and a scripted game

use polyhedral_sweeper::*;

fn main() -> Result<()> {
    let config = GameConfigBuilder::new()
        .seed(42)
        .difficulty(Difficulty::Easy)
        .build();

    let mut game = GameSession::new(config)?;
    println!(
        "Generated {} tiles on a {} ({} mines)",
        game.tiles().len(),
        game.config().surface.name(),
        game.mine_count()
    );

    let pentagons = game.tiles().iter().filter(|t| t.sides == 5).count();
    println!(
        "{} pentagons, {} hexagons",
        pentagons,
        game.tiles().len() - pentagons
    );

    // Open the board at tile 0, then keep revealing the lowest-id hidden
    // safe tile until the game ends. Peeking at is_mine makes this a sure
    // win; a real player gets the adjacent counts instead.
    game.reveal(0)?;
    while game.phase() == GamePhase::Playing {
        let next = game
            .tiles()
            .iter()
            .find(|t| !t.is_revealed && !t.is_mine)
            .map(|t| t.id);
        match next {
            Some(id) => {
                game.reveal(id)?;
            }
            None => break,
        }
    }

    println!("Finished in phase {:?}", game.phase());
    println!(
        "Revealed {} of {} tiles",
        game.tiles().iter().filter(|t| t.is_revealed).count(),
        game.tiles().len()
    );

    let mesh = generate_board_mesh(game.tiles(), &ClassicColorMapper);
    println!(
        "Board mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    #[cfg(feature = "spatial-index")]
    {
        let position = game.tiles()[0].center;
        println!(
            "Pick at {:?} hits tile {}",
            position,
            game.find_tile_at(position)
        );
    }

    Ok(())
}
