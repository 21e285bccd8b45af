pub mod models;
pub mod services;
pub mod utils;

pub use models::*;
pub use utils::error::GameError;
pub use utils::rng::{RandomSource, ScriptedRandom, SeededRandom};
