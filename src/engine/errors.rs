use crate::domain::{ConfigError, DeckError, PlayerError, SeatIndex};

use thiserror::Error;

/// Неисправимые ошибки движка. Любая из них прерывает раздачу.
/// Отклонённое решение игрока сюда не относится – см. `IllegalDecision`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("для раздачи нужно от 2 до 256 игроков, за столом {0}")]
    NotEnoughPlayers(usize),

    #[error("место дилера {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("игрок на месте {seat}: {source}")]
    Player {
        seat: SeatIndex,
        #[source]
        source: PlayerError,
    },

    #[error("ошибка колоды: {0}")]
    Deck(#[from] DeckError),

    #[error("игрок на месте {seat} получил {rejections} отказов подряд, раздача прервана")]
    TooManyRejections { seat: SeatIndex, rejections: u32 },

    #[error("некорректный конфиг стола: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub fn player(seat: SeatIndex, source: PlayerError) -> Self {
        EngineError::Player { seat, source }
    }
}
