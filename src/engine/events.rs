//! Значения, которые движок раздаёт игрокам.
//!
//! Всё здесь – обычные значения: каждый получатель владеет своей копией,
//! и её изменение не видно ни движку, ни другим игрокам.

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PublicView, SeatIndex};
use crate::engine::actions::Action;

/// Снимок раздачи на момент вызова.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealData {
    pub dealer: SeatIndex,
    /// Все фишки, поставленные в этой раздаче (включая текущую улицу).
    pub pot: Chips,
    pub folded: Vec<bool>,
    /// Ставки мест на текущей улице.
    pub bets: Vec<Chips>,
}

/// Принятое действие одного игрока, разосланное всем остальным.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEvent {
    pub seat: SeatIndex,
    pub actor: PublicView,
    pub action: Action,
}

/// Итог раздачи. Шоудауна и выплаты банка здесь нет:
/// только кто остался в игре и сколько фишек в банке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealOverEvent {
    pub contenders: Vec<SeatIndex>,
    pub pot: Chips,
}
