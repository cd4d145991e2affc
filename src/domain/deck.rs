use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};

/// Ошибки колоды.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("в колоде осталось {remaining} карт, запрошено {requested}")]
    Exhausted { requested: usize, remaining: usize },
}

/// Источник карт для раздачи.
///
/// Каждая выданная карта уникальна в пределах одной раздачи.
/// Если карт меньше, чем `n`, ничего не выдаётся и возвращается ошибка.
pub trait CardSource {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError>;

    fn remaining(&self) -> usize;
}

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает вызывающий код (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Колода из заранее заданного порядка: первая карта списка выдаётся первой.
    /// Удобно для тестов с фиксированными картами.
    pub fn stacked(order: Vec<Card>) -> Self {
        let mut cards = order;
        cards.reverse();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for Deck {
    /// Взять n карт сверху.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < n {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Ok(taken)
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
