//! Движок ставок: одна улица торговли и раздача вокруг неё.
//!
//! Высокоуровневые объекты:
//!   - `Deal` – блайнды, карманные карты, префлоп, рассылка событий;
//!   - `BettingRound` – машина состояний одной улицы;
//!   - `TableSession` – серия раздач за одним столом.

pub mod actions;
pub mod betting;
pub mod deal;
pub mod errors;
pub mod events;
pub mod hand_history;
pub mod positions;
pub mod table_session;
pub mod validation;

pub use actions::{Action, ActionError};
pub use betting::{BettingRound, RoundState, StreetOutcome};
pub use deal::{Deal, DealSummary};
pub use errors::EngineError;
pub use events::{DealData, DealOverEvent, PlayerEvent};
pub use hand_history::{BlindKind, DealEvent, DealEventKind, DealHistory};
pub use positions::{blind_seats, BlindSeats, SeatRing};
pub use table_session::TableSession;
pub use validation::{validate_action, DecisionContext, Effect, IllegalDecision};

/// RNG интерфейс для перемешивания колоды.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
