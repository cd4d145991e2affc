use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::actions::Action;
use crate::engine::validation::IllegalDecision;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
}

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealEventKind {
    /// Новая раздача началась.
    DealStarted { dealer: SeatIndex, seats: usize },

    BlindPosted {
        seat: SeatIndex,
        kind: BlindKind,
        amount: Chips,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Решение отклонено, игрока спросят ещё раз.
    DecisionRejected {
        seat: SeatIndex,
        action: Action,
        reason: IllegalDecision,
    },

    /// Принятое действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: Action,
        /// Ставка места на улице после действия.
        committed: Chips,
        bet_to_match: Chips,
    },

    /// Раунд ставок завершён.
    StreetComplete {
        bet_to_match: Chips,
        bets: Vec<Chips>,
        folded: Vec<bool>,
    },

    /// Раздача завершена.
    DealFinished {
        contenders: Vec<SeatIndex>,
        pot: Chips,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealEvent {
    pub index: u32,
    pub kind: DealEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealHistory {
    pub events: Vec<DealEvent>,
}

impl DealHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: DealEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(DealEvent { index: idx, kind });
    }

    /// Принятые действия в порядке хода.
    pub fn accepted_actions(&self) -> Vec<(SeatIndex, Action)> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                DealEventKind::PlayerActed { seat, action, .. } => Some((*seat, *action)),
                _ => None,
            })
            .collect()
    }

    /// Сколько раз решения места были отклонены.
    pub fn rejections_for(&self, seat: SeatIndex) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(&e.kind, DealEventKind::DecisionRejected { seat: s, .. } if *s == seat))
            .count()
    }
}
