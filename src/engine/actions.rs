use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;

/// Ошибки построения действия.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("неизвестный тип действия {0}: допускается 1..=5 (fold, check, call, bet, raise)")]
    InvalidActionType(u8),

    #[error("для bet/raise нужен размер ставки")]
    MissingAmount,

    #[error("не удалось разобрать действие {0:?}")]
    Parse(String),
}

/// Решение игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Открывающая ставка, когда уравнивать нечего.
    Bet(Chips),
    /// Повышение поверх суммы для уравнивания (дельта, а не итог).
    Raise(Chips),
}

impl Action {
    pub const FOLD: u8 = 1;
    pub const CHECK: u8 = 2;
    pub const CALL: u8 = 3;
    pub const BET: u8 = 4;
    pub const RAISE: u8 = 5;

    /// Построить действие по числовому коду 1..=5.
    /// Для fold/check/call `amount` игнорируется.
    pub fn from_code(code: u8, amount: Option<Chips>) -> Result<Self, ActionError> {
        match code {
            Self::FOLD => Ok(Action::Fold),
            Self::CHECK => Ok(Action::Check),
            Self::CALL => Ok(Action::Call),
            Self::BET => amount.map(Action::Bet).ok_or(ActionError::MissingAmount),
            Self::RAISE => amount.map(Action::Raise).ok_or(ActionError::MissingAmount),
            other => Err(ActionError::InvalidActionType(other)),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Action::Fold => Self::FOLD,
            Action::Check => Self::CHECK,
            Action::Call => Self::CALL,
            Action::Bet(_) => Self::BET,
            Action::Raise(_) => Self::RAISE,
        }
    }

    /// Размер для bet/raise.
    pub fn amount(&self) -> Option<Chips> {
        match self {
            Action::Bet(amount) | Action::Raise(amount) => Some(*amount),
            _ => None,
        }
    }

    /// Открывает ли действие торговлю заново (bet/raise).
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Bet(amount) => write!(f, "bet {amount}"),
            Action::Raise(amount) => write!(f, "raise {amount}"),
        }
    }
}

/// Формат сценариев: `fold`, `check`, `call`, `bet 10`, `raise 5` (регистр не важен).
impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || ActionError::Parse(s.to_string());
        let mut parts = s.split_whitespace();
        let kind = parts.next().ok_or_else(parse_err)?.to_ascii_lowercase();
        let amount = parts
            .next()
            .map(|raw| raw.parse::<u64>().map(Chips).map_err(|_| parse_err()))
            .transpose()?;
        if parts.next().is_some() {
            return Err(parse_err());
        }

        let code = match kind.as_str() {
            "fold" => Action::FOLD,
            "check" => Action::CHECK,
            "call" => Action::CALL,
            "bet" => Action::BET,
            "raise" => Action::RAISE,
            _ => return Err(parse_err()),
        };
        if amount.is_some() && code <= Action::CALL {
            return Err(parse_err());
        }
        Action::from_code(code, amount)
    }
}
