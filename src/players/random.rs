use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{ChipDelta, Chips, Player, PlayerError, PlayerState};
use crate::engine::{Action, DealData};

/// Бот со случайной, но всегда допустимой стратегией.
///
/// Выбор взвешенный: чаще пассивные действия, изредка bet/raise.
/// Больше своего стека не ставит, поэтому проходит и `StackPolicy::Capped`.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    state: PlayerState,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, chips: ChipDelta, seed: u64) -> Self {
        Self {
            state: PlayerState::new(name, chips),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn weight(action: &Action) -> u32 {
        match action {
            Action::Fold => 15,
            Action::Check => 40,
            Action::Call => 40,
            Action::Bet(_) | Action::Raise(_) => 5,
        }
    }
}

impl Player for RandomPlayer {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn make_decision(
        &mut self,
        _deal: &DealData,
        current_bet: Chips,
        to_call: Chips,
        min_raise: Option<Chips>,
    ) -> Result<Action, PlayerError> {
        let mut choices = vec![Action::Fold];
        match min_raise {
            Some(min_raise) if !to_call.is_zero() => {
                if self.state.can_cover(to_call) {
                    choices.push(Action::Call);
                }
                let floor = to_call + min_raise;
                if self.state.can_cover(floor) {
                    let headroom = (self.state.chips() as u64 - floor.0).min(min_raise.0);
                    let extra = self.rng.gen_range(0..=headroom);
                    choices.push(Action::Raise(min_raise + Chips(extra)));
                }
            }
            _ => {
                choices.push(Action::Check);
                let cap = current_bet.0.max(2).min(self.state.chips().max(0) as u64);
                if cap > 0 {
                    let size = self.rng.gen_range(1..=cap);
                    choices.push(Action::Bet(Chips(size)));
                }
            }
        }

        choices
            .choose_weighted(&mut self.rng, Self::weight)
            .copied()
            .map_err(|e| PlayerError::Custom(e.to_string()))
    }
}
