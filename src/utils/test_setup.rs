use std::sync::Once;

use crate::models::{config::GameConfig, game::Game, role::Role};

static INIT: Once = Once::new();

pub fn setup_test_env() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Game on the first night with the given players and fixed roles, tracing switched on.
pub fn game_with_roles(roles: &[(&str, Role)]) -> Game {
    setup_test_env();
    let names: Vec<&str> = roles.iter().map(|(name, _)| *name).collect();
    let mut game = Game::new(&names, GameConfig::default().with_trace())
        .expect("fixture names are unique and non-empty");
    for (id, (_, role)) in roles.iter().enumerate() {
        game.roster.set_role(id as u32, *role);
    }
    game
}

/// Same as `game_with_roles`, but already at `turn`.
pub fn game_on_turn(roles: &[(&str, Role)], turn: u32) -> Game {
    let mut game = game_with_roles(roles);
    game.turn = turn;
    game
}
