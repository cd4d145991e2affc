use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Индекс места за столом (0..N-1). За раздачу не переназначается.
pub type SeatIndex = u8;

/// Сколько раз подряд можно отклонить решение одного игрока на одном ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Спрашивать, пока игрок не ответит корректно. Бот с багом подвесит раздачу.
    Unbounded,
    /// После `n` отказов следующий отказ прерывает раздачу.
    Limit(u32),
}

impl RetryPolicy {
    /// Исчерпан ли лимит после `rejections` отказов.
    pub fn is_exceeded(&self, rejections: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => false,
            RetryPolicy::Limit(limit) => rejections > *limit,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Limit(3)
    }
}

/// Проверять ли, что ставка покрывается стеком.
///
/// All-in и сайд-потов нет: при `Unchecked` стек может уйти в минус,
/// при `Capped` call/bet/raise сверх стека отклоняется (fold разрешён всегда).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StackPolicy {
    #[default]
    Unchecked,
    Capped,
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("размер блайнда должен быть больше нуля")]
    ZeroBlind,

    #[error("лимит повторов должен быть больше нуля (или unbounded)")]
    ZeroRetryLimit,

    #[error("не удалось разобрать JSON конфигурации: {0}")]
    Json(#[from] serde_json::Error),
}

/// Конфиг стола: блайнд и политики движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Малый блайнд в фишках. Большой – вдвое больше.
    pub blind: Chips,
    pub retry_policy: RetryPolicy,
    pub stack_policy: StackPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            blind: Chips(1),
            retry_policy: RetryPolicy::default(),
            stack_policy: StackPolicy::default(),
        }
    }
}

impl TableConfig {
    pub fn with_blind(blind: Chips) -> Self {
        Self {
            blind,
            ..Self::default()
        }
    }

    pub fn small_blind(&self) -> Chips {
        self.blind
    }

    pub fn big_blind(&self) -> Chips {
        self.blind.times(2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blind.is_zero() {
            return Err(ConfigError::ZeroBlind);
        }
        if self.retry_policy == RetryPolicy::Limit(0) {
            return Err(ConfigError::ZeroRetryLimit);
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
