use werewolf_engine::{
    models::{death::DeathReason, game::GamePhase, record::MatchRecord, role::Role, role::Team},
    services::{
        result_service::{game_results, match_record},
        victory_service::{check_victory, evaluate_victory},
    },
    utils::test_setup::game_with_roles,
};

#[test]
fn test_villagers_win_when_wolves_are_gone() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Villager),
        ("Bob", Role::Villager),
        ("Charlie", Role::Werewolf),
    ]);
    game.roster_mut().kill(2, 1, DeathReason::Execute);

    let result = check_victory(&mut game).unwrap();
    assert_eq!(result.team, Team::Villager);
    assert_eq!(game.victory_team(), Some(Team::Villager));
    assert_eq!(game.phase(), GamePhase::Finished);
}

#[test]
fn test_werewolves_win_at_parity() {
    let mut game = game_with_roles(&[("Alice", Role::Werewolf), ("Bob", Role::Villager)]);
    let result = check_victory(&mut game).unwrap();
    assert_eq!(result.team, Team::Werewolf);
}

#[test]
fn test_madman_counts_as_villager_species() {
    // 狂人は人狼陣営だが種族は村人
    let game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Madman),
        ("Charlie", Role::Villager),
    ]);
    assert!(evaluate_victory(game.roster()).is_none());
}

#[test]
fn test_fox_overrides_villager_win() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Villager),
        ("Bob", Role::Fox),
        ("Charlie", Role::Werewolf),
        ("Dave", Role::Villager),
    ]);
    game.roster_mut().kill(2, 1, DeathReason::Execute);

    let result = check_victory(&mut game).unwrap();
    assert_eq!(result.team, Team::Fox);
    assert!(result.message.contains("人狼は全滅"));
}

#[test]
fn test_fox_overrides_werewolf_win() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Villager),
        ("Charlie", Role::Fox),
    ]);

    let result = check_victory(&mut game).unwrap();
    assert_eq!(result.team, Team::Fox);
    assert!(result.message.contains("人数以上"));
    assert_eq!(game.victory_team(), Some(Team::Fox));
}

#[test]
fn test_game_continues_without_winner() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Villager),
        ("Charlie", Role::Villager),
        ("Dave", Role::Seer),
    ]);
    assert!(check_victory(&mut game).is_none());
    assert_eq!(game.victory_team(), None);
    assert_eq!(game.phase(), GamePhase::Night);
}

#[test]
fn test_recorded_winner_is_final() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Villager),
        ("Charlie", Role::Villager),
    ]);
    game.roster_mut().kill(1, 1, DeathReason::Attack);
    let first = check_victory(&mut game).unwrap();
    assert_eq!(first.team, Team::Werewolf);

    // 勝利確定後に状態が変わっても記録は変わらない
    game.roster_mut().kill(0, 2, DeathReason::Execute);
    assert_eq!(evaluate_victory(game.roster()).unwrap().team, Team::Villager);

    let second = check_victory(&mut game).unwrap();
    assert_eq!(second, first);
    assert_eq!(game.victory_team(), Some(Team::Werewolf));
    assert_eq!(game.victory(), Some(&first));
    assert!(game_results(&game)
        .iter()
        .filter(|r| r.is_winner)
        .all(|r| r.team == second.team));
}

#[test]
fn test_results_projection() {
    let mut game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Madman),
        ("Charlie", Role::Villager),
        ("Dave", Role::Seer),
    ]);
    // 勝利前は誰も勝者ではない
    assert!(game_results(&game).iter().all(|r| !r.is_winner));

    game.roster_mut().kill(2, 2, DeathReason::Attack);
    game.roster_mut().kill(3, 2, DeathReason::Execute);
    check_victory(&mut game).unwrap();

    let results = game_results(&game);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].name, "Alice");
    assert_eq!(results[0].status, "最終日生存");
    assert!(results[0].is_winner);
    // 狂人も人狼陣営として勝利
    assert!(results[1].is_winner);
    assert_eq!(results[1].team, Team::Werewolf);
    assert_eq!(results[2].status, "2日目 襲撃により死亡");
    assert!(!results[2].is_winner);
    assert_eq!(results[3].status, "2日目 処刑により死亡");
    assert_eq!(results[3].role, Role::Seer);
}

#[test]
fn test_match_record_json() {
    let mut game = game_with_roles(&[("Alice", Role::Werewolf), ("Bob", Role::Villager)]);
    check_victory(&mut game).unwrap();

    let record = match_record(&game);
    assert_eq!(record.winning_team, "人狼");
    assert_eq!(record.player_count(), 2);
    assert!(record.file_name().ends_with(".json"));

    let json = record.to_json().unwrap();
    let restored = MatchRecord::from_json(&json).unwrap();
    assert_eq!(restored.id, record.id);
    assert_eq!(restored.players, record.players);
    assert_eq!(
        restored.played_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.played_at.format("%Y-%m-%d %H:%M:%S").to_string()
    );
}

#[test]
fn test_match_record_without_winner() {
    let game = game_with_roles(&[
        ("Alice", Role::Werewolf),
        ("Bob", Role::Villager),
        ("Charlie", Role::Villager),
    ]);
    assert_eq!(match_record(&game).winning_team, "不明");
}
