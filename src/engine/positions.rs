use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

/// Кольцо мест фиксированного размера. Вся арифметика мест идёт через него.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatRing {
    len: usize,
}

impl SeatRing {
    /// Кольцо из `len` мест. Нужно хотя бы двое, и индекс должен влезать в SeatIndex.
    pub fn new(len: usize) -> Result<Self, EngineError> {
        if len < 2 || len > SeatIndex::MAX as usize + 1 {
            return Err(EngineError::NotEnoughPlayers(len));
        }
        Ok(Self { len })
    }

    /// Пустого кольца не бывает: `new` требует хотя бы два места.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, seat: SeatIndex) -> bool {
        (seat as usize) < self.len
    }

    /// Привести произвольный (в т.ч. отрицательный) индекс к 0..len.
    pub fn normalize(&self, idx: i64) -> SeatIndex {
        idx.rem_euclid(self.len as i64) as SeatIndex
    }

    pub fn offset(&self, seat: SeatIndex, delta: i64) -> SeatIndex {
        self.normalize(seat as i64 + delta)
    }

    pub fn next(&self, seat: SeatIndex) -> SeatIndex {
        self.offset(seat, 1)
    }

    pub fn prev(&self, seat: SeatIndex) -> SeatIndex {
        self.offset(seat, -1)
    }

    /// Все места по кругу, начиная с `start` (включительно).
    pub fn iter_from(&self, start: SeatIndex) -> impl Iterator<Item = SeatIndex> + '_ {
        (0..self.len as i64).map(move |i| self.offset(start, i))
    }
}

/// Кто ставит блайнды и кто ходит первым на префлопе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindSeats {
    pub small_blind: SeatIndex,
    pub big_blind: SeatIndex,
    /// Первый ход – сразу после большого блайнда.
    pub first_to_act: SeatIndex,
}

/// Хедз-ап: дилер ставит малый блайнд, второй – большой.
/// Трое и больше: два места сразу после дилера.
/// Пропущенные блайнды и пустые места не учитываются.
pub fn blind_seats(ring: &SeatRing, dealer: SeatIndex) -> BlindSeats {
    let small_blind = if ring.len() == 2 {
        dealer
    } else {
        ring.next(dealer)
    };
    let big_blind = ring.next(small_blind);
    BlindSeats {
        small_blind,
        big_blind,
        first_to_act: ring.next(big_blind),
    }
}
