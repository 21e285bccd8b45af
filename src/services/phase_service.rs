use crate::{
    models::game::{Game, GamePhase},
    utils::error::GameError,
};

fn expect_phase(game: &Game, expected: GamePhase) -> Result<(), GameError> {
    if game.phase != expected {
        return Err(GameError::InvalidPhase {
            expected,
            actual: game.phase,
        });
    }
    Ok(())
}

/// Night -> day. The only place the turn counter moves.
pub fn begin_day(game: &mut Game) -> Result<u32, GameError> {
    expect_phase(game, GamePhase::Night)?;
    game.turn += 1;
    game.phase = GamePhase::Day;
    log::info!("Day {} begins", game.turn);
    Ok(game.turn)
}

/// Day -> night, keeping the current turn.
pub fn begin_night(game: &mut Game) -> Result<(), GameError> {
    expect_phase(game, GamePhase::Day)?;
    game.phase = GamePhase::Night;
    log::info!("Night of day {} begins", game.turn);
    Ok(())
}
