use std::collections::HashMap;

use werewolf_engine::{
    models::{
        action::{ActionKind, NightAction, NightActions},
        config::{default_role_counts, FirstDaySeerOption, GameConfig, HouseRules, RoleCounts},
        game::Game,
        outcome::PlayerResult,
        role::{Role, SeerResult},
    },
    services::{
        day_service, divination_service, night_service, phase_service, result_service,
        setup_service, victory_service,
    },
    utils::{
        rng::{choose, RandomSource, ScriptedRandom, SeededRandom},
        test_setup::{game_on_turn, game_with_roles, setup_test_env},
    },
};

fn assert_roster_consistent(game: &Game) {
    let roster = game.roster();
    assert_eq!(roster.alive_count() + roster.dead_players().count(), roster.len());
    for player in roster.players() {
        assert_eq!(player.is_alive, player.death.is_none(), "{}", player.name);
    }
}

fn night_actions(game: &Game, rng: &mut dyn RandomSource) -> NightActions {
    let mut actions = NightActions::new();
    for name in divination_service::night_order(game) {
        let kind = divination_service::expected_action(game, &name).unwrap();
        let action = match kind {
            Some(kind @ (ActionKind::Seer | ActionKind::Attack | ActionKind::Guard)) => {
                let targets = divination_service::available_targets(game, &name).unwrap();
                match choose(rng, &targets) {
                    Some(target) => NightAction::new(kind, Some(target.clone())),
                    None => NightAction::none(),
                }
            }
            Some(kind) => NightAction::new(kind, None),
            None => NightAction::none(),
        };
        actions.insert(name, action);
    }
    actions
}

fn day_votes(game: &Game, rng: &mut dyn RandomSource) -> HashMap<String, String> {
    let alive = divination_service::night_order(game);
    alive
        .iter()
        .filter_map(|voter| {
            let others: Vec<&String> = alive.iter().filter(|name| *name != voter).collect();
            choose(rng, &others).map(|target| (voter.clone(), (*target).clone()))
        })
        .collect()
}

/// Plays a whole match on autopilot and returns the final results.
fn play(seed: u64, role_counts: &RoleCounts) -> Vec<PlayerResult> {
    let names: Vec<String> = (1..=role_counts.values().sum::<usize>())
        .map(|i| format!("P{}", i))
        .collect();
    let mut rng = SeededRandom::from_seed_u64(seed);
    let mut game =
        setup_service::start_game(&names, role_counts, GameConfig::default(), &mut rng).unwrap();

    loop {
        assert!(game.turn() < 50, "match should end");
        let turn = game.turn();

        let actions = night_actions(&game, &mut rng);
        night_service::resolve_night_actions(&mut game, &actions, &mut rng);
        assert_eq!(game.turn(), turn);
        assert_roster_consistent(&game);

        assert_eq!(phase_service::begin_day(&mut game), Ok(turn + 1));
        if victory_service::check_victory(&mut game).is_some() {
            break;
        }

        let votes = day_votes(&game, &mut rng);
        let execution = day_service::execute_individual_votes(&mut game, &votes, &mut rng);
        assert_eq!(execution.error, None);
        assert_roster_consistent(&game);
        if victory_service::check_victory(&mut game).is_some() {
            break;
        }
        phase_service::begin_night(&mut game).unwrap();
    }

    assert!(game.is_finished());
    assert!(game.victory_team().is_some());
    result_service::game_results(&game)
}

#[test]
fn test_full_match_finishes() {
    setup_test_env();
    let results = play(42, &default_role_counts());
    assert_eq!(results.len(), 8);
    assert!(results.iter().any(|r| r.is_winner));
}

#[test]
fn test_full_match_is_reproducible() {
    setup_test_env();
    let mut counts = default_role_counts();
    counts.insert(Role::Villager, 1);
    counts.insert(Role::Fox, 1);
    counts.insert(Role::Immoralist, 1);
    counts.insert(Role::Nekomata, 1);

    for seed in [1, 7, 2024] {
        assert_eq!(play(seed, &counts), play(seed, &counts), "seed {}", seed);
    }
}

#[test]
fn test_available_targets_per_role() {
    let game = game_on_turn(
        &[
            ("Alice", Role::Werewolf),
            ("Bob", Role::Werewolf),
            ("Charlie", Role::Knight),
            ("Dave", Role::Seer),
            ("Eve", Role::Villager),
        ],
        2,
    );

    assert_eq!(
        divination_service::available_targets(&game, "Alice").unwrap(),
        vec!["Charlie", "Dave", "Eve"]
    );
    assert_eq!(
        divination_service::available_targets(&game, "Charlie").unwrap(),
        vec!["Alice", "Bob", "Dave", "Eve"]
    );
    assert!(divination_service::available_targets(&game, "Eve")
        .unwrap()
        .is_empty());
    assert!(divination_service::available_targets(&game, "Mallory").is_err());
    assert_eq!(divination_service::alive_werewolf_names(&game), vec!["Alice", "Bob"]);
}

#[test]
fn test_expected_action_follows_house_rules() {
    let roles = [
        ("Alice", Role::Werewolf),
        ("Bob", Role::Seer),
        ("Charlie", Role::Knight),
        ("Dave", Role::Villager),
    ];
    let game = game_with_roles(&roles);
    assert_eq!(divination_service::expected_action(&game, "Alice").unwrap(), None);
    assert_eq!(
        divination_service::expected_action(&game, "Bob").unwrap(),
        Some(ActionKind::Seer)
    );
    assert_eq!(divination_service::expected_action(&game, "Charlie").unwrap(), None);

    let names: Vec<&str> = roles.iter().map(|(n, _)| *n).collect();
    let config = GameConfig {
        house_rules: HouseRules {
            first_day_seer: FirstDaySeerOption::Disabled,
        },
        ..GameConfig::default()
    };
    let mut game = Game::new(&names, config).unwrap();
    game.roster_mut().set_role(1, Role::Seer);
    assert_eq!(divination_service::expected_action(&game, "Bob").unwrap(), None);
}

#[test]
fn test_readings() {
    let game = game_with_roles(&[
        ("Alice", Role::Seer),
        ("Bob", Role::Werewolf),
        ("Charlie", Role::Fox),
        ("Dave", Role::FakeSeer),
        ("Eve", Role::Villager),
    ]);
    assert_eq!(divination_service::divine(&game, "Bob"), Ok(SeerResult::Werewolf));
    assert_eq!(divination_service::divine(&game, "Charlie"), Ok(SeerResult::Villager));

    let mut rng = ScriptedRandom::new(&[0, 1]);
    assert_eq!(
        divination_service::seer_reading(&game, "Dave", "Eve", &mut rng),
        Ok(Some(SeerResult::Werewolf))
    );
    assert_eq!(
        divination_service::seer_reading(&game, "Dave", "Bob", &mut rng),
        Ok(Some(SeerResult::Villager))
    );
    assert_eq!(
        divination_service::seer_reading(&game, "Eve", "Bob", &mut rng),
        Ok(None)
    );

    // 初日ランダム白: 自分と人狼以外から選ばれる
    for pick in 0..4 {
        let mut rng = ScriptedRandom::new(&[pick]);
        let white = divination_service::first_night_white(&game, "Alice", &mut rng).unwrap();
        assert!(["Charlie", "Dave", "Eve"].contains(&white.as_str()));
    }
    assert_eq!(divination_service::medium_reading(&game), None);
}
