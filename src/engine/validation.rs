use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::{ChipDelta, Chips};
use crate::engine::actions::Action;

/// Почему решение отклонено. Ошибка локальная: игрока спросят ещё раз.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum IllegalDecision {
    #[error("нельзя сделать check: нужно доставить ещё {to_call} фишек")]
    CannotCheck { to_call: Chips },

    #[error("нельзя сделать call: уравнивать нечего, используйте check")]
    CannotCall,

    #[error("нельзя делать bet, когда есть ставка для уравнивания ({to_call} фишек): call или raise")]
    CannotBetFacingBet { to_call: Chips },

    #[error("ставка {amount} некорректна: она должна быть больше нуля")]
    NonPositiveBet { amount: Chips },

    #[error("нельзя делать raise, когда никто не ставил: используйте bet")]
    CannotRaiseWithoutBet,

    #[error("рейз {amount} слишком мал: минимум {min_raise}")]
    RaiseTooSmall { amount: Chips, min_raise: Chips },

    #[error("недостаточно фишек: нужно {needed}, в стеке {stack}")]
    InsufficientStack { needed: Chips, stack: ChipDelta },

    #[error("раунд ставок уже завершён")]
    RoundComplete,
}

/// Контекст решения для конкретного места на текущем уровне ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionContext {
    /// Текущая ставка, до которой нужно дотянуться (bet-to-match).
    pub current_bet: Chips,
    /// Сколько не хватает этому месту до `current_bet`.
    pub to_call: Chips,
    /// Минимальная дельта рейза; `None`, если уравнивать нечего.
    pub min_raise: Option<Chips>,
}

impl DecisionContext {
    pub fn new(current_bet: Chips, committed: Chips) -> Self {
        let to_call = current_bet.saturating_sub(committed);
        // Рейзить нужно минимум на размер текущей ставки (удвоение).
        let min_raise = if to_call.is_zero() {
            None
        } else {
            Some(current_bet.max(Chips(1)))
        };
        Self {
            current_bet,
            to_call,
            min_raise,
        }
    }
}

/// Что меняется в состоянии раунда после принятого действия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Fold,
    Check,
    Call { added: Chips },
    /// Bet или raise: новый уровень ставки, торговля открывается заново.
    Aggress { added: Chips, bet_to_match: Chips },
}

impl Effect {
    /// Сколько фишек место докладывает этим действием.
    pub fn chips_added(&self) -> Chips {
        match self {
            Effect::Fold | Effect::Check => Chips::ZERO,
            Effect::Call { added } | Effect::Aggress { added, .. } => *added,
        }
    }
}

/// Проверка решения по таблице допустимых действий.
///
/// `committed` – сколько место уже поставило на этой улице.
/// `stack_cap` задан только при политике `StackPolicy::Capped`.
pub fn validate_action(
    action: &Action,
    ctx: &DecisionContext,
    committed: Chips,
    stack_cap: Option<ChipDelta>,
) -> Result<Effect, IllegalDecision> {
    let effect = match *action {
        Action::Fold => return Ok(Effect::Fold),

        Action::Check => {
            if !ctx.to_call.is_zero() {
                return Err(IllegalDecision::CannotCheck { to_call: ctx.to_call });
            }
            return Ok(Effect::Check);
        }

        Action::Call => {
            if ctx.to_call.is_zero() {
                return Err(IllegalDecision::CannotCall);
            }
            Effect::Call { added: ctx.to_call }
        }

        Action::Bet(amount) => {
            if !ctx.to_call.is_zero() {
                return Err(IllegalDecision::CannotBetFacingBet { to_call: ctx.to_call });
            }
            if amount.is_zero() {
                return Err(IllegalDecision::NonPositiveBet { amount });
            }
            // На опции большого блайнда уровень = весь вклад места, а не только bet.
            Effect::Aggress {
                added: amount,
                bet_to_match: committed + amount,
            }
        }

        Action::Raise(delta) => {
            let min_raise = match ctx.min_raise {
                Some(min_raise) if !ctx.to_call.is_zero() => min_raise,
                _ => return Err(IllegalDecision::CannotRaiseWithoutBet),
            };
            if delta < min_raise {
                return Err(IllegalDecision::RaiseTooSmall {
                    amount: delta,
                    min_raise,
                });
            }
            Effect::Aggress {
                added: ctx.to_call + delta,
                bet_to_match: ctx.current_bet + delta,
            }
        }
    };

    if let Some(stack) = stack_cap {
        let needed = effect.chips_added();
        if stack < 0 || (stack as u64) < needed.0 {
            return Err(IllegalDecision::InsufficientStack { needed, stack });
        }
    }

    Ok(effect)
}
