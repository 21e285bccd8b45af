use std::collections::HashMap;

use anyhow::{anyhow, bail, Context};
use dotenvy::dotenv;
use env_logger::Builder;
use log::LevelFilter;
use structopt::StructOpt;

use werewolf_engine::{
    models::{
        action::{collect_night_actions, ActionKind, NightAction, NightActionRequest, NightActions},
        config::{default_role_counts, FirstDaySeerOption, GameConfig, RoleCounts},
        game::Game,
        role::Role,
    },
    services::{
        day_service, divination_service, night_service, phase_service, result_service,
        setup_service, victory_service,
    },
    utils::rng::{choose, RandomSource, SeededRandom},
};

// 無限ループ防止
const MAX_TURNS: u32 = 100;

#[derive(Debug, StructOpt)]
#[structopt(name = "werewolf", about = "hidden-role werewolf rules engine")]
enum Command {
    /// print the role catalog
    #[structopt(name = "roles")]
    Roles,
    /// play one match on autopilot and print the outcome
    #[structopt(name = "simulate")]
    Simulate {
        /// random seed (defaults to WEREWOLF_SEED, then entropy)
        #[structopt(long)]
        seed: Option<u64>,
        /// comma separated player names
        #[structopt(long, use_delimiter = true)]
        names: Vec<String>,
        /// role counts, e.g. `werewolf=2,seer=1,villager=3`
        #[structopt(long)]
        roles: Option<String>,
        /// print the match record as JSON
        #[structopt(long)]
        json: bool,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .filter_level(level)
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .format_target(true)
        .init();
}

fn parse_role(name: &str) -> Option<Role> {
    let wanted = name.trim().to_lowercase().replace(['_', '-'], "");
    Role::all()
        .iter()
        .copied()
        .find(|role| format!("{:?}", role).to_lowercase() == wanted || role.label() == name.trim())
}

fn parse_role_counts(spec: &str) -> anyhow::Result<RoleCounts> {
    let mut counts: RoleCounts = Role::all().iter().map(|role| (*role, 0)).collect();
    for entry in spec.split(',').filter(|s| !s.trim().is_empty()) {
        let (name, count) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected role=count, got '{}'", entry))?;
        let role = parse_role(name).ok_or_else(|| anyhow!("unknown role '{}'", name))?;
        let count: usize = count
            .trim()
            .parse()
            .with_context(|| format!("invalid count for {}", role))?;
        counts.insert(role, count);
    }
    Ok(counts)
}

fn print_roles() {
    let rules = GameConfig::default().house_rules;
    for role in Role::all() {
        println!(
            "{:<6} 陣営:{:<4} 種族:{:<4} 占い:{:<4} 霊媒:{:<6} 初夜:{} 2夜目以降:{}",
            role.label(),
            role.team(),
            role.species(),
            role.seer_result(),
            role.medium_result(),
            role.has_night_action(1, &rules),
            role.has_night_action(2, &rules),
        );
    }
}

/// Every living player submits something plausible for the night.
fn autopilot_night(game: &Game, rng: &mut dyn RandomSource) -> anyhow::Result<NightActions> {
    let mut requests = Vec::new();
    let random_white = game.turn() == 1
        && game.config().house_rules.first_day_seer == FirstDaySeerOption::RandomWhite;

    for name in divination_service::night_order(game) {
        let action = match divination_service::expected_action(game, &name)? {
            Some(ActionKind::Seer) if random_white => {
                if let Some(white) = divination_service::first_night_white(game, &name, rng) {
                    println!("  {}: 初日ランダム白 -> {}", name, white);
                }
                NightAction::none()
            }
            Some(kind @ (ActionKind::Seer | ActionKind::Attack | ActionKind::Guard)) => {
                let targets = divination_service::available_targets(game, &name)?;
                match choose(rng, &targets) {
                    Some(target) => {
                        if kind == ActionKind::Seer {
                            if let Some(result) =
                                divination_service::seer_reading(game, &name, target, rng)?
                            {
                                println!("  {}: {}の占い結果は{}", name, target, result);
                            }
                        }
                        NightAction::new(kind, Some(target.clone()))
                    }
                    None => NightAction::none(),
                }
            }
            Some(ActionKind::Medium) => {
                if let Some((executed, result)) = divination_service::medium_reading(game) {
                    println!("  {}: {}は{}", name, executed, result);
                }
                NightAction::medium()
            }
            _ => NightAction::none(),
        };
        requests.push(NightActionRequest::new(&name, action));
    }
    Ok(collect_night_actions(requests))
}

fn autopilot_votes(game: &Game, rng: &mut dyn RandomSource) -> HashMap<String, String> {
    let alive = divination_service::night_order(game);
    let mut votes = HashMap::new();
    for voter in &alive {
        let others: Vec<&String> = alive.iter().filter(|name| *name != voter).collect();
        if let Some(target) = choose(rng, &others) {
            votes.insert(voter.clone(), (*target).clone());
        }
    }
    votes
}

fn simulate(
    seed: Option<u64>,
    names: Vec<String>,
    roles: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = GameConfig::from_env();
    if seed.is_some() {
        config.seed = seed;
    }
    let mut rng = SeededRandom::from_optional_seed(config.seed);

    let role_counts = match roles {
        Some(spec) => parse_role_counts(&spec)?,
        None => default_role_counts(),
    };
    let names = if names.is_empty() {
        let count: usize = role_counts.values().sum();
        (1..=count).map(|i| format!("プレイヤー{}", i)).collect()
    } else {
        names
    };

    let mut game = setup_service::start_game(&names, &role_counts, config, &mut rng)?;
    for player in game.roster().players() {
        println!("{} -> {}", player.name, player.role);
    }

    let victory = loop {
        if game.turn() > MAX_TURNS {
            bail!("match did not finish within {} turns", MAX_TURNS);
        }

        println!("== {}日目 夜 ==", game.turn());
        let actions = autopilot_night(&game, &mut rng)?;
        let night = night_service::resolve_night_actions(&mut game, &actions, &mut rng);
        if let Some(trace) = &night.trace {
            for line in trace {
                println!("  [trace] {}", line);
            }
        }
        phase_service::begin_day(&mut game)?;
        println!("犠牲者: {:?}", night.victims);
        if let Some(victory) = victory_service::check_victory(&mut game) {
            break victory;
        }

        println!("== {}日目 昼 ==", game.turn());
        let votes = autopilot_votes(&game, &mut rng);
        let execution = day_service::execute_individual_votes(&mut game, &votes, &mut rng);
        if let Some(error) = &execution.error {
            bail!("execution failed: {}", error);
        }
        if let Some(trace) = &execution.trace {
            println!("  [trace] {}", trace);
        }
        println!("処刑・連鎖死: {:?}", execution.deaths());
        if let Some(victory) = victory_service::check_victory(&mut game) {
            break victory;
        }
        phase_service::begin_night(&mut game)?;
    };

    println!("{}", victory.message);
    for result in result_service::game_results(&game) {
        println!(
            "{} {} [{}] {} {}",
            if result.is_winner { "🏆" } else { "  " },
            result.name,
            result.role,
            result.team,
            result.status
        );
    }

    if json {
        let record = result_service::match_record(&game);
        println!("{}", record.to_json()?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // 環境変数をロード
    if let Err(e) = dotenv() {
        eprintln!("Warning: .env not loaded: {}", e);
    }

    let config = GameConfig::from_env();
    init_logger(config.debug.verbose_logging);

    match Command::from_args() {
        Command::Roles => print_roles(),
        Command::Simulate {
            seed,
            names,
            roles,
            json,
        } => simulate(seed, names, roles, json)?,
    }
    Ok(())
}
