use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{CardSource, Chips, Player, StackPolicy, SeatIndex, TableConfig};
use crate::engine::actions::Action;
use crate::engine::betting::{BettingRound, RoundState, StreetOutcome};
use crate::engine::errors::EngineError;
use crate::engine::events::{DealData, DealOverEvent, PlayerEvent};
use crate::engine::hand_history::{BlindKind, DealEventKind, DealHistory};
use crate::engine::positions::{blind_seats, BlindSeats, SeatRing};

/// Итог раздачи для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealSummary {
    pub dealer: SeatIndex,
    pub blinds: BlindSeats,
    /// Итог префлопа – единственной улицы, которую ведёт движок.
    pub street: StreetOutcome,
    /// Все фишки, поставленные в раздаче. Банк никому не выплачивается.
    pub pot: Chips,
    pub history: DealHistory,
}

/// Одна раздача: блайнды, карманные карты, префлоп, рассылка событий.
///
/// Всё синхронно: в каждый момент решение принимает ровно одно место,
/// и движок ждёт возврата из его `make_decision`.
pub struct Deal<'a, D: CardSource> {
    players: Vec<&'a mut dyn Player>,
    ring: SeatRing,
    dealer: SeatIndex,
    config: TableConfig,
    deck: D,
    /// Fold действует до конца раздачи, а не одной улицы.
    folded: Vec<bool>,
    /// Фишки завершённых улиц.
    pot: Chips,
    history: DealHistory,
}

impl<'a, D: CardSource> Deal<'a, D> {
    pub fn new(
        players: Vec<&'a mut dyn Player>,
        dealer: SeatIndex,
        config: TableConfig,
        deck: D,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let ring = SeatRing::new(players.len())?;
        if !ring.contains(dealer) {
            return Err(EngineError::InvalidSeat(dealer));
        }

        Ok(Self {
            folded: vec![false; players.len()],
            players,
            ring,
            dealer,
            config,
            deck,
            pot: Chips::ZERO,
            history: DealHistory::new(),
        })
    }

    pub fn ring(&self) -> SeatRing {
        self.ring
    }

    pub fn folded(&self) -> &[bool] {
        &self.folded
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn history(&self) -> &DealHistory {
        &self.history
    }

    /// Провести раздачу. Любая ошибка, кроме отклонённого решения, прерывает её.
    pub fn execute(mut self) -> Result<DealSummary, EngineError> {
        info!(
            "раздача: дилер на месте {}, игроков {}, блайнд {}",
            self.dealer,
            self.ring.len(),
            self.config.blind
        );
        self.history.push(DealEventKind::DealStarted {
            dealer: self.dealer,
            seats: self.ring.len(),
        });

        let blinds = self.post_blinds();
        let street = match self.play_streets(&blinds) {
            Ok(street) => street,
            Err(e) => {
                self.abort(&e);
                return Err(e);
            }
        };
        self.finish()?;

        Ok(DealSummary {
            dealer: self.dealer,
            blinds,
            street,
            pot: self.pot,
            history: self.history,
        })
    }

    /// Карты и торговля. Флоп, тёрн, ривер и шоудаун движок не ведёт.
    fn play_streets(&mut self, blinds: &BlindSeats) -> Result<StreetOutcome, EngineError> {
        self.deal_hole_cards()?;
        self.do_betting_round(blinds.first_to_act, true)
    }

    /// Прерванная раздача: карманные карты забираются у всех.
    /// Списанные блайнды и ставки остаются списанными.
    fn abort(&mut self, error: &EngineError) {
        warn!("раздача прервана: {error}");
        let ring = self.ring;
        for seat in ring.iter_from(0) {
            if let Err(e) = self.players[seat as usize].set_hole_cards(Vec::new()) {
                warn!("место {seat}: не удалось забрать карты ({e})");
            }
        }
    }

    /// Снимок для игрока. Каждый вызов – новое независимое значение.
    pub fn deal_data(&self, round: Option<&BettingRound>) -> DealData {
        match round {
            Some(round) => DealData {
                dealer: self.dealer,
                pot: self.pot + round.bets().iter().sum::<Chips>(),
                folded: round.folded().to_vec(),
                bets: round.bets().to_vec(),
            },
            None => DealData {
                dealer: self.dealer,
                pot: self.pot,
                folded: self.folded.clone(),
                bets: vec![Chips::ZERO; self.ring.len()],
            },
        }
    }

    /// Полный раунд ставок: пока все не уравняют ставку или не сфолдят.
    ///
    /// На префлопе место `start - 1` считается большим блайндом, `start - 2` –
    /// малым; их ставки уже стоят, но у большого блайнда остаётся опция.
    /// Ставки улицы уходят в банк, флаги fold сохраняются для раздачи.
    pub fn do_betting_round(
        &mut self,
        start: SeatIndex,
        is_preflop: bool,
    ) -> Result<StreetOutcome, EngineError> {
        let blind = is_preflop.then_some(self.config.blind);
        let mut round = BettingRound::new(self.ring, start, self.folded.clone(), blind)?;

        while let RoundState::AwaitingDecision(seat) = round.state() {
            self.solicit(&mut round, seat)?;
        }

        let outcome = round.into_outcome();
        self.folded.clone_from(&outcome.folded);
        self.pot += outcome.bets.iter().sum::<Chips>();

        info!(
            "улица завершена: ставка {}, решений {}, в игре {:?}",
            outcome.bet_to_match,
            outcome.decisions,
            outcome.contenders()
        );
        self.history.push(DealEventKind::StreetComplete {
            bet_to_match: outcome.bet_to_match,
            bets: outcome.bets.clone(),
            folded: outcome.folded.clone(),
        });
        Ok(outcome)
    }

    /// Спрашивать место, пока решение не будет принято или не кончится лимит отказов.
    fn solicit(&mut self, round: &mut BettingRound, seat: SeatIndex) -> Result<(), EngineError> {
        let idx = seat as usize;
        let mut rejections = 0u32;

        loop {
            let ctx = round.context(seat);
            let snapshot = self.deal_data(Some(&*round));
            let action = self.players[idx]
                .make_decision(&snapshot, ctx.current_bet, ctx.to_call, ctx.min_raise)
                .map_err(|e| EngineError::player(seat, e))?;

            let stack_cap = match self.config.stack_policy {
                StackPolicy::Unchecked => None,
                StackPolicy::Capped => Some(self.players[idx].state().chips()),
            };

            match round.apply(&action, stack_cap) {
                Ok(effect) => {
                    let added = effect.chips_added();
                    if !added.is_zero() {
                        self.players[idx].modify_chips(added.as_debit());
                    }
                    debug!(
                        "место {seat}: {action} (ставка {}, уровень {})",
                        round.committed(seat),
                        round.bet_to_match()
                    );
                    self.history.push(DealEventKind::PlayerActed {
                        seat,
                        action,
                        committed: round.committed(seat),
                        bet_to_match: round.bet_to_match(),
                    });
                    self.notify_players_of_action(round, seat, action);
                    return Ok(());
                }
                Err(reason) => {
                    rejections += 1;
                    warn!("место {seat}: {action} отклонено ({reason}), отказ №{rejections}");
                    self.history.push(DealEventKind::DecisionRejected {
                        seat,
                        action,
                        reason: reason.clone(),
                    });
                    self.players[idx].on_error(&reason);

                    if self.config.retry_policy.is_exceeded(rejections) {
                        return Err(EngineError::TooManyRejections { seat, rejections });
                    }
                }
            }
        }
    }

    /// Разослать действие всем, кроме самого игрока. У каждого своя копия.
    fn notify_players_of_action(&mut self, round: &BettingRound, actor: SeatIndex, action: Action) {
        let ring = self.ring;
        let view = self.players[actor as usize].public_view();
        for other in ring.iter_from(ring.next(actor)).filter(|&s| s != actor) {
            let deal_data = self.deal_data(Some(round));
            let event = PlayerEvent {
                seat: actor,
                actor: view.clone(),
                action,
            };
            self.players[other as usize].on_player_event(deal_data, event);
        }
    }

    /// Блайнды списываются безусловно: без проверки стека и без отказа.
    fn post_blinds(&mut self) -> BlindSeats {
        let seats = blind_seats(&self.ring, self.dealer);
        let posts = [
            (seats.small_blind, BlindKind::Small, self.config.small_blind()),
            (seats.big_blind, BlindKind::Big, self.config.big_blind()),
        ];
        for (seat, kind, amount) in posts {
            self.players[seat as usize].modify_chips(amount.as_debit());
            debug!("место {seat}: блайнд {kind:?} {amount}");
            self.history.push(DealEventKind::BlindPosted { seat, kind, amount });
        }
        seats
    }

    /// По две карты каждому, начиная слева от дилера.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        let ring = self.ring;
        for seat in ring.iter_from(ring.next(self.dealer)) {
            let cards = self.deck.draw(2)?;
            self.players[seat as usize]
                .set_hole_cards(cards.clone())
                .map_err(|e| EngineError::player(seat, e))?;
            self.history.push(DealEventKind::HoleCardsDealt { seat, cards });
        }
        Ok(())
    }

    /// Оповестить всех о конце раздачи и забрать карманные карты.
    fn finish(&mut self) -> Result<(), EngineError> {
        let ring = self.ring;
        let contenders: Vec<SeatIndex> = ring
            .iter_from(0)
            .filter(|&s| !self.folded[s as usize])
            .collect();

        for seat in ring.iter_from(0) {
            let deal_data = self.deal_data(None);
            let event = DealOverEvent {
                contenders: contenders.clone(),
                pot: self.pot,
            };
            let player = &mut self.players[seat as usize];
            player.on_deal_over(deal_data, event);
            player
                .set_hole_cards(Vec::new())
                .map_err(|e| EngineError::player(seat, e))?;
        }

        info!("раздача завершена: банк {}, в игре {:?}", self.pot, contenders);
        self.history.push(DealEventKind::DealFinished {
            contenders,
            pot: self.pot,
        });
        Ok(())
    }
}
