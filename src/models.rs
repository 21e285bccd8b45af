pub mod action;
pub mod config;
pub mod death;
pub mod game;
pub mod outcome;
pub mod player;
pub mod record;
pub mod role;
pub mod roster;

pub use action::*;
pub use config::*;
pub use death::*;
pub use game::*;
pub use outcome::*;
pub use player::*;
pub use record::*;
pub use role::*;
pub use roster::*;
