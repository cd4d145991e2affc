//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use betting_engine::domain::*;

/// Конфиг стола из JSON: все поля необязательны.
#[test]
fn table_config_from_json() {
    let cfg = TableConfig::from_json_str(
        r#"{ "blind": 5, "retry_policy": "unbounded", "stack_policy": "capped" }"#,
    )
    .unwrap();
    assert_eq!(cfg.small_blind(), Chips(5));
    assert_eq!(cfg.big_blind(), Chips(10));
    assert_eq!(cfg.retry_policy, RetryPolicy::Unbounded);
    assert_eq!(cfg.stack_policy, StackPolicy::Capped);

    let cfg = TableConfig::from_json_str(r#"{ "retry_policy": { "limit": 7 } }"#).unwrap();
    assert_eq!(cfg.blind, Chips(1));
    assert_eq!(cfg.retry_policy, RetryPolicy::Limit(7));

    assert_eq!(TableConfig::from_json_str("{}").unwrap(), TableConfig::default());
}

#[test]
fn table_config_rejects_bad_values() {
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "blind": 0 }"#),
        Err(ConfigError::ZeroBlind)
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "retry_policy": { "limit": 0 } }"#),
        Err(ConfigError::ZeroRetryLimit)
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "blind": -3 }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str("not json"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn retry_policy_counts_rejections() {
    let limit = RetryPolicy::default();
    assert_eq!(limit, RetryPolicy::Limit(3));
    assert!(!limit.is_exceeded(3));
    assert!(limit.is_exceeded(4));
    assert!(!RetryPolicy::Unbounded.is_exceeded(u32::MAX));
}

/// Колода: 52 уникальные карты, выдача без повторов, ошибка без частичной выдачи.
#[test]
fn deck_draws_unique_cards_until_exhausted() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.remaining(), 52);

    let mut seen = HashSet::new();
    for _ in 0..26 {
        for card in deck.draw(2).unwrap() {
            assert!(seen.insert(card), "карта {card} выдана дважды");
        }
    }
    assert!(deck.is_empty());
    assert_eq!(
        deck.draw(1),
        Err(DeckError::Exhausted {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn stacked_deck_keeps_order() {
    let order: Vec<Card> = ["Ah", "Kd", "Qs"].iter().map(|s| s.parse().unwrap()).collect();
    let mut deck = Deck::stacked(order.clone());

    assert!(deck.draw(4).is_err());
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.draw(3).unwrap(), order);
}

#[test]
fn card_text_roundtrip_covers_the_deck() {
    for card in Deck::standard_52().cards {
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
    assert!("10h".parse::<Card>().is_err());
}

/// Фишки: арифметика не уходит ниже нуля, сумма по срезу.
#[test]
fn chips_arithmetic() {
    assert_eq!(Chips(3) - Chips(5), Chips::ZERO);
    assert_eq!(Chips(3) + Chips(5), Chips(8));
    assert_eq!([Chips(1), Chips(2), Chips(3)].iter().sum::<Chips>(), Chips(6));
    assert_eq!(Chips(7).as_debit(), -7);
    assert_eq!(Chips(4).times(2), Chips(8));
}

#[test]
fn player_state_tracks_signed_chips() {
    let mut state = PlayerState::new("dana", 3);
    state.modify_chips(Chips(5).as_debit());
    assert_eq!(state.chips(), -2);
    assert!(!state.can_cover(Chips(1)));

    state.modify_chips(10);
    assert!(state.can_cover(Chips(8)));
    assert!(!state.can_cover(Chips(9)));
}

/// Карта: разбор и вывод в формате `Td`, ошибки разбора.
#[test]
fn card_parse_and_display_agree() {
    let card: Card = "Td".parse().unwrap();
    assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(card.to_string(), "Td");
    assert_eq!("as".parse::<Card>().unwrap().to_string(), "As");

    assert_eq!("A".parse::<Card>(), Err(CardParseError::BadLength("A".into())));
    assert_eq!("1h".parse::<Card>(), Err(CardParseError::BadRank('1')));
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::BadSuit('x')));
}

#[test]
fn failed_draw_takes_nothing() {
    let mut deck = Deck::standard_52();
    deck.draw(50).unwrap();
    assert_eq!(
        deck.draw(3),
        Err(DeckError::Exhausted {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| s.parse().unwrap()).collect()
}

/// Карманных карт либо нет, либо ровно две.
#[test]
fn hole_cards_must_be_zero_or_two() {
    let mut state = PlayerState::new("alice", 100);
    assert_eq!(
        state.set_hole_cards(cards(&["Ah"])),
        Err(PlayerError::MalformedHoleCards(1))
    );
    assert_eq!(
        state.set_hole_cards(cards(&["Ah", "Kd", "2c"])),
        Err(PlayerError::MalformedHoleCards(3))
    );
    assert!(state.hole_cards().is_none());

    state.set_hole_cards(cards(&["Ah", "Kd"])).unwrap();
    assert_eq!(state.hole_cards().unwrap()[1].to_string(), "Kd");

    state.set_hole_cards(Vec::new()).unwrap();
    assert!(state.hole_cards().is_none());
}

#[test]
fn public_view_shows_name_and_stack_only() {
    let mut state = PlayerState::new("bob", 10);
    state.set_hole_cards(cards(&["7c", "7d"])).unwrap();
    state.modify_chips(-12);

    let view = state.public_view();
    assert_eq!(view, PublicView { name: "bob".into(), chips: -2 });
}
