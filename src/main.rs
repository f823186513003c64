//! Play Old Maid in the terminal against three computer players.
//!
//! Usage: `old-maid [seed]`. Set `RUST_LOG=debug` to see engine logs.

use std::env;
use std::io;
use std::process::ExitCode;

use log::error;

use old_maid::console::{ConsoleInput, ConsoleObserver};
use old_maid::OldMaidBuilder;

fn main() -> ExitCode {
    env_logger::init();

    let mut builder = OldMaidBuilder::new();
    if let Some(arg) = env::args().nth(1) {
        match arg.parse() {
            Ok(seed) => builder = builder.seed(seed),
            Err(_) => {
                eprintln!("usage: old-maid [seed]");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut game = match builder.build() {
        Ok(game) => game,
        Err(err) => {
            error!("could not start game: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("Seed: {}", game.rng().seed());

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut observer = ConsoleObserver::new(io::stdout());

    match game.run(&mut input, &mut observer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("game stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}
