use crate::domain::{ChipDelta, Chips, Player, PlayerError, PlayerState};
use crate::engine::{Action, DealData};

/// Всегда фолдит. Поведение игрока по умолчанию.
#[derive(Clone, Debug)]
pub struct FoldingPlayer {
    state: PlayerState,
}

impl FoldingPlayer {
    pub fn new(name: impl Into<String>, chips: ChipDelta) -> Self {
        Self {
            state: PlayerState::new(name, chips),
        }
    }
}

impl Player for FoldingPlayer {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn make_decision(
        &mut self,
        _deal: &DealData,
        _current_bet: Chips,
        _to_call: Chips,
        _min_raise: Option<Chips>,
    ) -> Result<Action, PlayerError> {
        Ok(Action::Fold)
    }
}

/// Никогда не повышает: check, если уравнивать нечего, иначе call.
#[derive(Clone, Debug)]
pub struct CallingStation {
    state: PlayerState,
}

impl CallingStation {
    pub fn new(name: impl Into<String>, chips: ChipDelta) -> Self {
        Self {
            state: PlayerState::new(name, chips),
        }
    }
}

impl Player for CallingStation {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn make_decision(
        &mut self,
        _deal: &DealData,
        _current_bet: Chips,
        to_call: Chips,
        _min_raise: Option<Chips>,
    ) -> Result<Action, PlayerError> {
        if to_call.is_zero() {
            Ok(Action::Check)
        } else {
            Ok(Action::Call)
        }
    }
}
