// tests/engine_core_tests.rs

//! Строительные блоки движка по отдельности:
//! - действия: коды 1..=5 и текстовый формат сценариев;
//! - кольцо мест и позиции блайндов;
//! - таблица допустимых действий (validate_action);
//! - автомат раунда ставок без игроков.

use betting_engine::domain::Chips;
use betting_engine::engine::{
    blind_seats, validate_action, Action, ActionError, BettingRound, BlindSeats, DecisionContext,
    Effect, EngineError, IllegalDecision, RoundState, SeatRing,
};

//
// ДЕЙСТВИЯ
//

#[test]
fn bet_keeps_its_amount() {
    let bet = Action::from_code(Action::BET, Some(Chips(7))).unwrap();
    assert_eq!(bet, Action::Bet(Chips(7)));
    assert_eq!(bet.amount(), Some(Chips(7)));
    assert_eq!(bet.code(), 4);
    assert_eq!(Action::from_code(Action::FOLD, Some(Chips(3))), Ok(Action::Fold));
}

#[test]
fn codes_outside_range_are_rejected() {
    assert_eq!(Action::from_code(0, None), Err(ActionError::InvalidActionType(0)));
    assert_eq!(Action::from_code(6, None), Err(ActionError::InvalidActionType(6)));
    assert_eq!(Action::from_code(Action::RAISE, None), Err(ActionError::MissingAmount));
}

#[test]
fn parses_script_syntax() {
    assert_eq!("FOLD".parse::<Action>(), Ok(Action::Fold));
    assert_eq!("raise 10".parse::<Action>(), Ok(Action::Raise(Chips(10))));
    assert_eq!("  bet   3 ".parse::<Action>(), Ok(Action::Bet(Chips(3))));
    assert_eq!("bet".parse::<Action>(), Err(ActionError::MissingAmount));

    assert!("call 5".parse::<Action>().is_err());
    assert!("shove".parse::<Action>().is_err());
    assert!("bet x".parse::<Action>().is_err());
}

#[test]
fn display_matches_script_syntax() {
    for action in [Action::Check, Action::Bet(Chips(5)), Action::Raise(Chips(2))] {
        assert_eq!(action.to_string().parse::<Action>(), Ok(action));
    }
}

//
// КОЛЬЦО МЕСТ
//

#[test]
fn normalize_wraps_both_ways() {
    let ring = SeatRing::new(3).unwrap();
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.normalize(3), 0);
    assert_eq!(ring.normalize(-1), 2);
    assert_eq!(ring.normalize(-4), 2);
    assert_eq!(ring.prev(0), 2);
    assert_eq!(ring.next(2), 0);
    assert_eq!(ring.iter_from(1).collect::<Vec<_>>(), vec![1, 2, 0]);
}

#[test]
fn ring_needs_two_seats() {
    assert!(matches!(SeatRing::new(1), Err(EngineError::NotEnoughPlayers(1))));
    assert!(matches!(SeatRing::new(0), Err(EngineError::NotEnoughPlayers(0))));
    assert_eq!(SeatRing::new(2).unwrap().len(), 2);
}

#[test]
fn heads_up_dealer_posts_small_blind() {
    let ring = SeatRing::new(2).unwrap();
    assert_eq!(
        blind_seats(&ring, 0),
        BlindSeats {
            small_blind: 0,
            big_blind: 1,
            first_to_act: 0
        }
    );
}

#[test]
fn multiway_blinds_follow_dealer() {
    let ring = SeatRing::new(4).unwrap();
    assert_eq!(
        blind_seats(&ring, 3),
        BlindSeats {
            small_blind: 0,
            big_blind: 1,
            first_to_act: 2
        }
    );
}

//
// ТАБЛИЦА ДОПУСТИМЫХ ДЕЙСТВИЙ
//

/// Хелпер: контекст места, которое поставило `committed` при уровне `current_bet`.
fn facing(current_bet: u64, committed: u64) -> (DecisionContext, Chips) {
    let committed = Chips(committed);
    (DecisionContext::new(Chips(current_bet), committed), committed)
}

#[test]
fn min_raise_only_when_facing_a_bet() {
    let (ctx, _) = facing(2, 1);
    assert_eq!(ctx.to_call, Chips(1));
    assert_eq!(ctx.min_raise, Some(Chips(2)));

    let (ctx, _) = facing(2, 2);
    assert_eq!(ctx.to_call, Chips::ZERO);
    assert_eq!(ctx.min_raise, None);
}

#[test]
fn fold_is_always_legal() {
    for (cb, committed) in [(0, 0), (2, 1), (40, 0)] {
        let (ctx, committed) = facing(cb, committed);
        assert_eq!(validate_action(&Action::Fold, &ctx, committed, Some(0)), Ok(Effect::Fold));
    }
}

#[test]
fn check_requires_nothing_owed() {
    let (ctx, committed) = facing(3, 3);
    assert_eq!(validate_action(&Action::Check, &ctx, committed, None), Ok(Effect::Check));

    let (ctx, committed) = facing(3, 1);
    assert_eq!(
        validate_action(&Action::Check, &ctx, committed, None),
        Err(IllegalDecision::CannotCheck { to_call: Chips(2) })
    );
}

#[test]
fn call_requires_something_owed() {
    let (ctx, committed) = facing(5, 2);
    assert_eq!(
        validate_action(&Action::Call, &ctx, committed, None),
        Ok(Effect::Call { added: Chips(3) })
    );

    let (ctx, committed) = facing(0, 0);
    assert_eq!(
        validate_action(&Action::Call, &ctx, committed, None),
        Err(IllegalDecision::CannotCall)
    );
}

#[test]
fn bet_rules() {
    let (ctx, committed) = facing(5, 0);
    assert_eq!(
        validate_action(&Action::Bet(Chips(5)), &ctx, committed, None),
        Err(IllegalDecision::CannotBetFacingBet { to_call: Chips(5) })
    );

    let (ctx, committed) = facing(0, 0);
    assert_eq!(
        validate_action(&Action::Bet(Chips::ZERO), &ctx, committed, None),
        Err(IllegalDecision::NonPositiveBet { amount: Chips::ZERO })
    );
    assert_eq!(
        validate_action(&Action::Bet(Chips(5)), &ctx, committed, None),
        Ok(Effect::Aggress {
            added: Chips(5),
            bet_to_match: Chips(5)
        })
    );
}

#[test]
fn bet_on_big_blind_option_keeps_level_monotone() {
    // Большой блайнд уже поставил 2: bet 4 поднимает уровень до 6, а не до 4.
    let (ctx, committed) = facing(2, 2);
    assert_eq!(
        validate_action(&Action::Bet(Chips(4)), &ctx, committed, None),
        Ok(Effect::Aggress {
            added: Chips(4),
            bet_to_match: Chips(6)
        })
    );
}

#[test]
fn raise_rules() {
    let (ctx, committed) = facing(0, 0);
    assert_eq!(
        validate_action(&Action::Raise(Chips(3)), &ctx, committed, None),
        Err(IllegalDecision::CannotRaiseWithoutBet)
    );

    let (ctx, committed) = facing(4, 0);
    assert_eq!(
        validate_action(&Action::Raise(Chips(3)), &ctx, committed, None),
        Err(IllegalDecision::RaiseTooSmall {
            amount: Chips(3),
            min_raise: Chips(4)
        })
    );
    assert_eq!(
        validate_action(&Action::Raise(Chips(4)), &ctx, committed, None),
        Ok(Effect::Aggress {
            added: Chips(8),
            bet_to_match: Chips(8)
        })
    );
}

#[test]
fn capped_stack_rejects_overbets() {
    let (ctx, committed) = facing(10, 0);
    assert_eq!(
        validate_action(&Action::Call, &ctx, committed, Some(9)),
        Err(IllegalDecision::InsufficientStack {
            needed: Chips(10),
            stack: 9
        })
    );
    assert!(validate_action(&Action::Call, &ctx, committed, Some(10)).is_ok());
    assert!(validate_action(&Action::Call, &ctx, committed, None).is_ok());
}

//
// АВТОМАТ РАУНДА
//

/// Хелпер: раунд без сфолдивших мест.
fn round(seats: usize, start: u8, blind: Option<u64>) -> BettingRound {
    let ring = SeatRing::new(seats).unwrap();
    BettingRound::new(ring, start, vec![false; seats], blind.map(Chips)).unwrap()
}

#[test]
fn preflop_posts_blinds_behind_start() {
    let r = round(4, 3, Some(5));
    assert_eq!(r.bets(), &[Chips(0), Chips(5), Chips(10), Chips(0)]);
    assert_eq!(r.bet_to_match(), Chips(10));
    assert_eq!(r.last_to_act(), 2);
    assert_eq!(r.state(), RoundState::AwaitingDecision(3));
}

#[test]
fn rejected_action_keeps_the_turn() {
    let mut r = round(3, 0, Some(1));
    assert_eq!(
        r.apply(&Action::Check, None),
        Err(IllegalDecision::CannotCheck { to_call: Chips(2) })
    );
    assert_eq!(r.state(), RoundState::AwaitingDecision(0));
    assert_eq!(r.decisions(), 0);
}

#[test]
fn folded_seats_are_skipped() {
    let ring = SeatRing::new(4).unwrap();
    let mut r = BettingRound::new(ring, 0, vec![false, true, true, false], None).unwrap();

    r.apply(&Action::Check, None).unwrap();
    assert_eq!(r.state(), RoundState::AwaitingDecision(3));
    r.apply(&Action::Check, None).unwrap();
    assert!(r.is_complete());
}

#[test]
fn folded_last_to_act_ends_the_round() {
    let ring = SeatRing::new(3).unwrap();
    let mut r = BettingRound::new(ring, 0, vec![false, false, true], None).unwrap();

    r.apply(&Action::Check, None).unwrap();
    r.apply(&Action::Check, None).unwrap();
    assert!(r.is_complete());
    assert_eq!(r.decisions(), 2);
}

#[test]
fn nothing_to_do_once_complete() {
    let mut r = round(2, 0, None);
    r.apply(&Action::Fold, None).unwrap();
    r.apply(&Action::Fold, None).unwrap();
    assert!(r.is_complete());
    assert_eq!(r.current_seat(), None);
    assert_eq!(r.apply(&Action::Check, None), Err(IllegalDecision::RoundComplete));
}

#[test]
fn bad_start_seat_is_rejected() {
    let ring = SeatRing::new(3).unwrap();
    assert!(matches!(
        BettingRound::new(ring, 3, vec![false; 3], None),
        Err(EngineError::InvalidSeat(3))
    ));
    assert!(matches!(
        BettingRound::new(ring, 0, vec![false; 2], None),
        Err(EngineError::NotEnoughPlayers(2))
    ));
}
