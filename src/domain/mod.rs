//! Доменная модель: карты, фишки, колода, игроки, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod player;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use player::*;
pub use table::*;
