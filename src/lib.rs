//! Движок торговли для карточной игры с блайндами.
//!
//! Раздача (`engine::Deal`) ставит блайнды, раздаёт карманные карты и проводит
//! одну улицу торговли, синхронно спрашивая решения у игроков (`domain::Player`)
//! по кругу и рассылая каждое принятое действие остальным.
//!
//! Сила рук, шоудаун, сайд-поты и следующие улицы сюда не входят.

pub mod domain;
pub mod engine;
pub mod infra;
pub mod players;

pub use domain::{Chips, Player, PlayerState, SeatIndex, TableConfig};
pub use engine::{Action, Deal, DealSummary, EngineError, TableSession};
