// src/engine/table_session.rs

use log::info;

use crate::domain::{Deck, Player, SeatIndex, TableConfig};
use crate::engine::deal::{Deal, DealSummary};
use crate::engine::errors::EngineError;
use crate::engine::positions::SeatRing;
use crate::engine::RandomSource;

/// Стол, за которым играется серия раздач.
///
/// Игроки создаются один раз и живут между раздачами (стеки переносятся),
/// кнопка дилера сдвигается на одно место после каждой успешной раздачи.
/// Банк не выплачивается: шоудауна в движке нет, фишки банка остаются
/// в `DealSummary::pot`.
pub struct TableSession<R: RandomSource> {
    players: Vec<Box<dyn Player>>,
    config: TableConfig,
    ring: SeatRing,
    dealer: SeatIndex,
    rng: R,
    deals_played: u64,
}

impl<R: RandomSource> TableSession<R> {
    /// Создать стол. Первая раздача – с дилером на месте 0.
    pub fn new(players: Vec<Box<dyn Player>>, config: TableConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let ring = SeatRing::new(players.len())?;
        Ok(Self {
            players,
            config,
            ring,
            dealer: 0,
            rng,
            deals_played: 0,
        })
    }

    /// Посадить кнопку на конкретное место.
    pub fn with_dealer(mut self, dealer: SeatIndex) -> Result<Self, EngineError> {
        if !self.ring.contains(dealer) {
            return Err(EngineError::InvalidSeat(dealer));
        }
        self.dealer = dealer;
        Ok(self)
    }

    pub fn dealer(&self) -> SeatIndex {
        self.dealer
    }

    pub fn deals_played(&self) -> u64 {
        self.deals_played
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Box<dyn Player>] {
        &self.players
    }

    /// Сыграть одну раздачу новой перемешанной колодой.
    /// При ошибке раздача прерывается, кнопка остаётся на месте.
    pub fn play_deal(&mut self) -> Result<DealSummary, EngineError> {
        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);

        let seats: Vec<&mut dyn Player> = self
            .players
            .iter_mut()
            .map(|p| p.as_mut() as &mut dyn Player)
            .collect();
        let summary = Deal::new(seats, self.dealer, self.config.clone(), deck)?.execute()?;

        self.deals_played += 1;
        self.dealer = self.ring.next(self.dealer);
        info!(
            "стол: сыграно раздач {}, следующий дилер {}",
            self.deals_played, self.dealer
        );
        Ok(summary)
    }

    /// Сыграть `count` раздач подряд; первая же ошибка останавливает серию.
    pub fn play_deals(&mut self, count: usize) -> Result<Vec<DealSummary>, EngineError> {
        (0..count).map(|_| self.play_deal()).collect()
    }
}
