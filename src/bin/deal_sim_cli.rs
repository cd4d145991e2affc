//! Прогон раздач из JSON-конфига.
//!
//! deal_sim_cli [config.json]
//!
//! Без аргумента играется демо-стол на троих. Уровень логов задаётся
//! переменной BETTING_ENGINE_LOG (error/warn/info/debug/trace), по умолчанию info.
//! История каждой раздачи печатается в stdout как JSON.

use std::error::Error;
use std::fs;
use std::process;

use log::LevelFilter;
use serde::Deserialize;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use betting_engine::domain::{ChipDelta, Player, TableConfig};
use betting_engine::engine::TableSession;
use betting_engine::infra::DeterministicRng;
use betting_engine::players::{CallingStation, FoldingPlayer, RandomPlayer, ScriptedPlayer};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Strategy {
    Script { actions: Vec<String> },
    Folding,
    Calling,
    Random { seed: u64 },
}

#[derive(Debug, Deserialize)]
struct SeatConfig {
    name: String,
    chips: ChipDelta,
    strategy: Strategy,
}

#[derive(Debug, Deserialize)]
struct SimulationConfig {
    #[serde(default)]
    table: TableConfig,
    seats: Vec<SeatConfig>,
    #[serde(default = "default_deals")]
    deals: usize,
    #[serde(default)]
    seed: u64,
}

fn default_deals() -> usize {
    1
}

fn demo_config() -> SimulationConfig {
    let seat = |name: &str, strategy| SeatConfig {
        name: name.to_string(),
        chips: 200,
        strategy,
    };
    SimulationConfig {
        table: TableConfig::default(),
        seats: vec![
            seat("alice", Strategy::Random { seed: 1 }),
            seat("bob", Strategy::Calling),
            seat("carol", Strategy::Random { seed: 2 }),
        ],
        deals: 5,
        seed: 42,
    }
}

fn build_player(seat: SeatConfig) -> Result<Box<dyn Player>, Box<dyn Error>> {
    let player: Box<dyn Player> = match seat.strategy {
        Strategy::Script { actions } => {
            let lines: Vec<&str> = actions.iter().map(String::as_str).collect();
            Box::new(ScriptedPlayer::from_script(seat.name, &lines, seat.chips)?)
        }
        Strategy::Folding => Box::new(FoldingPlayer::new(seat.name, seat.chips)),
        Strategy::Calling => Box::new(CallingStation::new(seat.name, seat.chips)),
        Strategy::Random { seed } => Box::new(RandomPlayer::new(seat.name, seat.chips, seed)),
    };
    Ok(player)
}

fn init_logging() {
    let level = std::env::var("BETTING_ENGINE_LOG")
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    // Повторная инициализация логгера не критична.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str::<SimulationConfig>(&fs::read_to_string(path)?)?,
        None => demo_config(),
    };
    config.table.validate()?;

    let players = config
        .seats
        .into_iter()
        .map(build_player)
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = TableSession::new(players, config.table, DeterministicRng::from_u64(config.seed))?;
    for _ in 0..config.deals {
        let summary = session.play_deal()?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    for player in session.players() {
        let view = player.public_view();
        log::info!("{:<16}{:>8}", view.name, view.chips);
    }
    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("deal_sim_cli: {e}");
        process::exit(1);
    }
}
