use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::chips::{ChipDelta, Chips};
use crate::engine::actions::Action;
use crate::engine::events::{DealData, DealOverEvent, PlayerEvent};
use crate::engine::validation::IllegalDecision;

/// Ошибки на стороне игрока. Любая из них прерывает раздачу.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    /// Сценарному игроку не хватило заготовленных действий.
    #[error("сценарий исчерпан: запрошено решение №{requested}, а действий всего {available}")]
    ScriptExhausted { requested: usize, available: usize },

    /// Карманных карт должно быть ровно 0 или 2.
    #[error("нельзя выдать {0} карманных карт: допускается 0 или 2")]
    MalformedHoleCards(usize),

    #[error("{0}")]
    Custom(String),
}

/// Публичная проекция игрока: то, что видят остальные. Карманных карт здесь нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicView {
    pub name: String,
    pub chips: ChipDelta,
}

/// Состояние игрока, которое живёт дольше одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    /// Стек со знаком: без all-in модели он может уйти в минус.
    chips: ChipDelta,
    hole_cards: Option<[Card; 2]>,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, chips: ChipDelta) -> Self {
        Self {
            name: name.into(),
            chips,
            hole_cards: None,
        }
    }

    pub fn chips(&self) -> ChipDelta {
        self.chips
    }

    pub fn modify_chips(&mut self, delta: ChipDelta) {
        self.chips = self.chips.saturating_add(delta);
    }

    pub fn hole_cards(&self) -> Option<&[Card; 2]> {
        self.hole_cards.as_ref()
    }

    /// Пустой список очищает руку, две карты – выдают новую.
    pub fn set_hole_cards(&mut self, cards: Vec<Card>) -> Result<(), PlayerError> {
        self.hole_cards = match cards[..] {
            [] => None,
            [first, second] => Some([first, second]),
            _ => return Err(PlayerError::MalformedHoleCards(cards.len())),
        };
        Ok(())
    }

    pub fn public_view(&self) -> PublicView {
        PublicView {
            name: self.name.clone(),
            chips: self.chips,
        }
    }

    /// Может ли стек покрыть ставку такого размера.
    pub fn can_cover(&self, amount: Chips) -> bool {
        self.chips >= 0 && (self.chips as u64) >= amount.0
    }
}

/// Игрок за столом – то, что движок вызывает синхронно, по одному за раз.
///
/// Движок знает только этот трейт. Конкретные реализации: сценарные игроки
/// для тестов, боты, интерактивные клиенты.
pub trait Player {
    fn state(&self) -> &PlayerState;

    fn state_mut(&mut self) -> &mut PlayerState;

    /// Запрос решения. `min_raise` равен `None`, когда уравнивать нечего.
    fn make_decision(
        &mut self,
        deal: &DealData,
        current_bet: Chips,
        to_call: Chips,
        min_raise: Option<Chips>,
    ) -> Result<Action, PlayerError>;

    /// Действие другого игрока принято движком.
    fn on_player_event(&mut self, _deal: DealData, _event: PlayerEvent) {}

    fn on_deal_over(&mut self, _deal: DealData, _event: DealOverEvent) {}

    /// Собственное действие отклонено; после этого движок спросит ещё раз.
    fn on_error(&mut self, _error: &IllegalDecision) {}

    fn set_hole_cards(&mut self, cards: Vec<Card>) -> Result<(), PlayerError> {
        self.state_mut().set_hole_cards(cards)
    }

    fn modify_chips(&mut self, delta: ChipDelta) {
        self.state_mut().modify_chips(delta);
    }

    fn public_view(&self) -> PublicView {
        self.state().public_view()
    }
}
