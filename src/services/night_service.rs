use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::resolution::{immoralists_follow_last_fox, most_voted, note};
use crate::{
    models::{
        action::{ActionKind, NightAction, NightActions},
        death::DeathReason,
        game::Game,
        outcome::NightResult,
        role::{Role, Species},
    },
    utils::rng::{choose, RandomSource},
};

struct Submission<'a> {
    actor: String,
    role: Role,
    action: &'a NightAction,
}

/// Resolves one night's submissions against the roster.
///
/// Only submissions from players alive when resolution starts count, and they stay valid
/// even if their author dies during the pass. Order: curses (and the immoralist chain),
/// guards, attack tally, attack. The turn counter is not touched.
pub fn resolve_night_actions(
    game: &mut Game,
    actions: &NightActions,
    rng: &mut dyn RandomSource,
) -> NightResult {
    let turn = game.turn;
    let mut trace = game.new_trace();
    let mut victims: BTreeSet<String> = BTreeSet::new();
    let mut chained_suicides: Vec<String> = Vec::new();

    let alive_at_start: HashSet<String> = game
        .roster
        .alive_players()
        .map(|p| p.name.clone())
        .collect();

    let mut ignored: Vec<&String> = actions
        .keys()
        .filter(|name| !alive_at_start.contains(*name))
        .collect();
    ignored.sort();
    for name in ignored {
        log::warn!("Ignoring night action from {} (unknown or dead)", name);
        note(&mut trace, format!("{}のアクションは無効(不明または死亡)", name));
    }

    // 1. 各プレイヤーのアクションを名簿順に分類
    let submissions: Vec<Submission> = game
        .roster
        .alive_players()
        .filter_map(|p| {
            actions.get(&p.name).map(|action| Submission {
                actor: p.name.clone(),
                role: p.role,
                action,
            })
        })
        .collect();

    let resolvable = |target: &Option<String>| -> Option<String> {
        target
            .as_ref()
            .filter(|name| alive_at_start.contains(*name))
            .cloned()
    };

    // 2. 占い(呪殺)
    for sub in submissions.iter().filter(|s| s.action.kind == ActionKind::Seer) {
        let Some(target_name) = resolvable(&sub.action.target) else {
            note(&mut trace, format!("{}の占い対象が解決できません", sub.actor));
            continue;
        };
        match sub.role {
            Role::Seer => {
                let Some(target) = game.roster.find_by_name(&target_name) else {
                    continue;
                };
                if target.role.species() != Species::Fox {
                    note(&mut trace, format!("{}が{}を占った", sub.actor, target_name));
                    continue;
                }
                let target_id = target.id;
                if game.roster.kill(target_id, turn, DeathReason::Curse) {
                    victims.insert(target_name.clone());
                    note(&mut trace, format!("{}が{}(妖狐)を呪殺", sub.actor, target_name));

                    let followers = immoralists_follow_last_fox(game, &mut trace);
                    victims.extend(followers.iter().cloned());
                    chained_suicides.extend(followers);
                }
            }
            // 偽占い師の結果は表示側で生成する
            Role::FakeSeer => {
                note(&mut trace, format!("{}(偽占い師)が{}を占った", sub.actor, target_name));
            }
            _ => {
                note(&mut trace, format!("{}は占い師ではないため占いは無効", sub.actor));
            }
        }
    }

    // 3. 護衛
    let mut protected: HashSet<String> = HashSet::new();
    for sub in submissions.iter().filter(|s| s.action.kind == ActionKind::Guard) {
        if let Some(target_name) = &sub.action.target {
            protected.insert(target_name.clone());
            note(&mut trace, format!("{}が{}を護衛", sub.actor, target_name));
        }
    }

    // 4. 襲撃対象の集計
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for sub in submissions.iter().filter(|s| s.action.kind == ActionKind::Attack) {
        match &sub.action.target {
            Some(target_name) if game.roster.find_by_name(target_name).is_some() => {
                *tally.entry(target_name.clone()).or_insert(0) += 1;
                note(&mut trace, format!("{}が{}を襲撃対象に選択", sub.actor, target_name));
            }
            _ => {
                note(&mut trace, format!("{}の襲撃対象が解決できません", sub.actor));
            }
        }
    }

    for sub in submissions
        .iter()
        .filter(|s| matches!(s.action.kind, ActionKind::Medium | ActionKind::None))
    {
        note(&mut trace, format!("{}: アクションなし({:?})", sub.actor, sub.action.kind));
    }

    // 5. 襲撃の解決
    if let Some((victim_name, candidates)) = most_voted(&tally, rng) {
        if candidates.len() > 1 {
            note(
                &mut trace,
                format!("複数の襲撃対象が同票のためランダムに決定: {:?} -> {}", candidates, victim_name),
            );
        } else {
            note(&mut trace, format!("人狼の最終襲撃対象は{}", victim_name));
        }

        let victim = game
            .roster
            .find_by_name(&victim_name)
            .filter(|p| p.is_alive)
            .map(|p| (p.id, p.role));

        match victim {
            None => note(&mut trace, format!("襲撃失敗: {}は既に死亡している", victim_name)),
            Some(_) if protected.contains(&victim_name) => {
                note(&mut trace, format!("襲撃失敗: {}は守られていた", victim_name));
            }
            Some((_, role)) if role.species() == Species::Fox => {
                note(&mut trace, format!("襲撃失敗: {}は妖狐だった", victim_name));
            }
            Some((victim_id, role)) => {
                if game.roster.kill(victim_id, turn, DeathReason::Attack) {
                    victims.insert(victim_name.clone());
                    note(&mut trace, format!("襲撃成功: {}が死亡", victim_name));
                }

                // 猫又の道連れ(生存人狼から一人)
                if role == Role::Nekomata {
                    let wolves = game
                        .roster
                        .alive_ids_where(|p| p.role.species() == Species::Werewolf);
                    match choose(rng, &wolves).copied() {
                        Some(wolf_id) => {
                            if game.roster.kill(wolf_id, turn, DeathReason::Retaliation) {
                                if let Some(wolf) = game.roster.get(wolf_id) {
                                    victims.insert(wolf.name.clone());
                                    note(
                                        &mut trace,
                                        format!("{}(猫又)が{}(人狼)を道連れにした", victim_name, wolf.name),
                                    );
                                }
                            }
                        }
                        None => note(
                            &mut trace,
                            format!("{}(猫又)が襲撃されたが、道連れにする生存人狼がいない", victim_name),
                        ),
                    }
                }
            }
        }
    }

    note(&mut trace, format!("今夜の最終犠牲者リスト: {:?}", victims));
    game.last_night_victims = victims.clone();

    NightResult {
        victims,
        chained_suicides,
        trace,
    }
}
