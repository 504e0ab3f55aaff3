use bingo_game::Game;
use bingo_generator::{BoardGenerator, BoardSeed, NumberCaller};

/// Domain used to derive the number caller's seed from the board seed.
pub const CALLER_SEED_DOMAIN: &str = "bingo/number-caller";

#[must_use]
pub fn generate_random_game() -> Game {
    let generated = BoardGenerator::new().generate();
    log::info!("generated board, seed={}", generated.seed);
    Game::new(generated)
}

/// Returns the suggestion caller paired with a board seed.
#[must_use]
pub fn caller_for(seed: BoardSeed) -> NumberCaller {
    NumberCaller::new(seed.derive(CALLER_SEED_DOMAIN))
}

/// Recreates the caller of a saved game after `drawn` suggestions.
#[must_use]
pub fn resume_caller_for(seed: BoardSeed, drawn: usize) -> NumberCaller {
    NumberCaller::resume(seed.derive(CALLER_SEED_DOMAIN), drawn)
}
