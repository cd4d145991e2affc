//! Реализации трейта `Player`: сценарные игроки для тестов и простые боты.

pub mod passive;
pub mod random;
pub mod scripted;

pub use passive::{CallingStation, FoldingPlayer};
pub use random::RandomPlayer;
pub use scripted::{create_scripted_players, DecisionRequest, ScriptedPlayer, DEFAULT_SCRIPT_CHIPS};
