extern crate failure;
extern crate marble_mania as marbles;

use failure::Error;
use marbles::{Game, Setup};
use std::io::Read;
use std::time::Instant;

fn play(setup: Setup) -> Result<u64, Error> {
    let start = Instant::now();
    let mut game = Game::with_capacity(setup.players, setup.last_marble)?;
    while game.turn() < setup.last_marble {
        game.play_turn();
        if game.turn() % 100_000 == 0 {
            eprint!(".");
        }
    }
    eprintln!();
    eprintln!(
        "{} players; last marble {}: {:?}",
        setup.players,
        setup.last_marble,
        start.elapsed()
    );
    Ok(game.high_score())
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let setup: Setup = input.parse()?;
    println!("high score: {}", play(setup)?);
    println!("high score, 100 times as many marbles: {}", play(setup.scaled(100)?)?);

    Ok(())
}
