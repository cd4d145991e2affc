use serde::{Deserialize, Serialize};

use crate::domain::chips::{ChipDelta, Chips};
use crate::domain::SeatIndex;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::positions::SeatRing;
use crate::engine::validation::{validate_action, DecisionContext, Effect, IllegalDecision};

/// Состояние раунда ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundState {
    /// Ждём решения от этого места.
    AwaitingDecision(SeatIndex),
    Complete,
}

/// Итог одной улицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreetOutcome {
    /// Ставки мест на улице (включая блайнды на префлопе).
    pub bets: Vec<Chips>,
    pub folded: Vec<bool>,
    pub bet_to_match: Chips,
    /// Сколько решений было принято (без отклонённых).
    pub decisions: u32,
}

impl StreetOutcome {
    /// Места, которые не сфолдили.
    pub fn contenders(&self) -> Vec<SeatIndex> {
        self.folded
            .iter()
            .enumerate()
            .filter(|(_, folded)| !**folded)
            .map(|(seat, _)| seat as SeatIndex)
            .collect()
    }
}

/// Раунд ставок (одна улица).
///
/// Ставки улицы живут только внутри раунда. Флаги fold приходят снаружи
/// (они действуют всю раздачу) и возвращаются в `StreetOutcome`.
///
/// Раунд завершается, когда текущее место – `last_to_act` и оно либо
/// сфолдило, либо уравняло `bet_to_match`. Bet/raise переносят `last_to_act`
/// на место перед агрессором, и торговля открывается для всех заново.
#[derive(Clone, Debug)]
pub struct BettingRound {
    ring: SeatRing,
    bets: Vec<Chips>,
    folded: Vec<bool>,
    bet_to_match: Chips,
    last_to_act: SeatIndex,
    current: SeatIndex,
    state: RoundState,
    decisions: u32,
}

impl BettingRound {
    /// Новый раунд с первым ходом у `start`.
    ///
    /// `preflop_blind` – размер малого блайнда на префлопе: место перед `start`
    /// считается большим блайндом (2 единицы), место за два до – малым (1 единица).
    /// Фишки со стеков здесь не списываются, это уже сделал постинг блайндов.
    pub fn new(
        ring: SeatRing,
        start: SeatIndex,
        folded: Vec<bool>,
        preflop_blind: Option<Chips>,
    ) -> Result<Self, EngineError> {
        if !ring.contains(start) {
            return Err(EngineError::InvalidSeat(start));
        }
        if folded.len() != ring.len() {
            return Err(EngineError::NotEnoughPlayers(folded.len()));
        }

        let mut bets = vec![Chips::ZERO; ring.len()];
        let mut bet_to_match = Chips::ZERO;
        if let Some(blind) = preflop_blind {
            bets[ring.offset(start, -1) as usize] = blind.times(2);
            bets[ring.offset(start, -2) as usize] = blind;
            bet_to_match = blind.times(2);
        }

        let mut round = Self {
            ring,
            bets,
            folded,
            bet_to_match,
            // Блайнд – не добровольная ставка: у большого блайнда остаётся опция.
            last_to_act: ring.prev(start),
            current: start,
            state: RoundState::Complete,
            decisions: 0,
        };
        round.settle();
        Ok(round)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == RoundState::Complete
    }

    pub fn current_seat(&self) -> Option<SeatIndex> {
        match self.state {
            RoundState::AwaitingDecision(seat) => Some(seat),
            RoundState::Complete => None,
        }
    }

    pub fn bet_to_match(&self) -> Chips {
        self.bet_to_match
    }

    pub fn last_to_act(&self) -> SeatIndex {
        self.last_to_act
    }

    pub fn bets(&self) -> &[Chips] {
        &self.bets
    }

    pub fn folded(&self) -> &[bool] {
        &self.folded
    }

    pub fn committed(&self, seat: SeatIndex) -> Chips {
        self.bets[seat as usize]
    }

    pub fn decisions(&self) -> u32 {
        self.decisions
    }

    /// Контекст решения (current_bet, to_call, min_raise) для места.
    pub fn context(&self, seat: SeatIndex) -> DecisionContext {
        DecisionContext::new(self.bet_to_match, self.committed(seat))
    }

    /// Применить решение текущего места.
    ///
    /// Отклонённое решение ничего не меняет: ход остаётся у того же места.
    /// Принятое – применяется, после чего раунд либо завершается, либо
    /// переходит к следующему не сфолдившему месту.
    pub fn apply(
        &mut self,
        action: &Action,
        stack_cap: Option<ChipDelta>,
    ) -> Result<Effect, IllegalDecision> {
        let seat = match self.state {
            RoundState::AwaitingDecision(seat) => seat,
            RoundState::Complete => return Err(IllegalDecision::RoundComplete),
        };
        let idx = seat as usize;
        let effect = validate_action(action, &self.context(seat), self.bets[idx], stack_cap)?;

        match effect {
            Effect::Fold => self.folded[idx] = true,
            Effect::Check => {}
            Effect::Call { added } => self.bets[idx] += added,
            Effect::Aggress {
                added,
                bet_to_match,
            } => {
                self.bets[idx] += added;
                self.bet_to_match = bet_to_match;
                self.last_to_act = self.ring.prev(seat);
            }
        }
        self.decisions += 1;

        if self.ends_at(seat) {
            self.state = RoundState::Complete;
        } else {
            self.current = self.ring.next(seat);
            self.settle();
        }
        Ok(effect)
    }

    pub fn into_outcome(self) -> StreetOutcome {
        StreetOutcome {
            bets: self.bets,
            folded: self.folded,
            bet_to_match: self.bet_to_match,
            decisions: self.decisions,
        }
    }

    /// Условие завершения проверяется только на текущем месте.
    fn ends_at(&self, seat: SeatIndex) -> bool {
        let idx = seat as usize;
        seat == self.last_to_act && (self.folded[idx] || self.bets[idx] == self.bet_to_match)
    }

    /// Пропустить сфолдивших (они участвуют только в проверке завершения)
    /// и остановиться на первом месте, которое должно принять решение.
    fn settle(&mut self) {
        loop {
            if !self.folded[self.current as usize] {
                self.state = RoundState::AwaitingDecision(self.current);
                return;
            }
            if self.ends_at(self.current) {
                self.state = RoundState::Complete;
                return;
            }
            self.current = self.ring.next(self.current);
        }
    }
}
