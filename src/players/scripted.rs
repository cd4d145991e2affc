use serde::{Deserialize, Serialize};

use crate::domain::{ChipDelta, Chips, Player, PlayerError, PlayerState};
use crate::engine::{Action, ActionError, DealData, DealOverEvent, IllegalDecision, PlayerEvent};

/// Стек сценарного игрока по умолчанию.
pub const DEFAULT_SCRIPT_CHIPS: ChipDelta = 10;

/// Один запрос решения, как его увидел игрок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionRequest {
    pub deal: DealData,
    pub current_bet: Chips,
    pub to_call: Chips,
    pub min_raise: Option<Chips>,
}

/// Игрок, который отдаёт заранее заданные действия по одному на запрос.
///
/// Всё, что ему присылает движок, сохраняется для проверок в тестах.
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    state: PlayerState,
    script: Vec<Action>,
    next: usize,
    requests: Vec<DecisionRequest>,
    errors: Vec<IllegalDecision>,
    events: Vec<(DealData, PlayerEvent)>,
    deals_over: Vec<(DealData, DealOverEvent)>,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>, script: Vec<Action>, chips: ChipDelta) -> Self {
        Self {
            state: PlayerState::new(name, chips),
            script,
            next: 0,
            requests: Vec::new(),
            errors: Vec::new(),
            events: Vec::new(),
            deals_over: Vec::new(),
        }
    }

    /// Сценарий строками: `"fold"`, `"check"`, `"call"`, `"bet 10"`, `"raise 5"`.
    pub fn from_script(
        name: impl Into<String>,
        script: &[&str],
        chips: ChipDelta,
    ) -> Result<Self, ActionError> {
        let actions = script
            .iter()
            .map(|line| line.parse::<Action>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, actions, chips))
    }

    /// Сколько действий сценария ещё не использовано.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }

    pub fn requests(&self) -> &[DecisionRequest] {
        &self.requests
    }

    pub fn errors(&self) -> &[IllegalDecision] {
        &self.errors
    }

    pub fn events(&self) -> &[(DealData, PlayerEvent)] {
        &self.events
    }

    pub fn deals_over(&self) -> &[(DealData, DealOverEvent)] {
        &self.deals_over
    }
}

impl Player for ScriptedPlayer {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    fn make_decision(
        &mut self,
        deal: &DealData,
        current_bet: Chips,
        to_call: Chips,
        min_raise: Option<Chips>,
    ) -> Result<Action, PlayerError> {
        self.requests.push(DecisionRequest {
            deal: deal.clone(),
            current_bet,
            to_call,
            min_raise,
        });

        let action = self
            .script
            .get(self.next)
            .copied()
            .ok_or(PlayerError::ScriptExhausted {
                requested: self.next + 1,
                available: self.script.len(),
            })?;
        self.next += 1;
        Ok(action)
    }

    fn on_player_event(&mut self, deal: DealData, event: PlayerEvent) {
        self.events.push((deal, event));
    }

    fn on_deal_over(&mut self, deal: DealData, event: DealOverEvent) {
        self.deals_over.push((deal, event));
    }

    fn on_error(&mut self, error: &IllegalDecision) {
        self.errors.push(error.clone());
    }
}

/// Сценарные игроки с именами `seat-0`, `seat-1`, … и одинаковым стеком.
pub fn create_scripted_players(
    scripts: &[&[&str]],
    chips: ChipDelta,
) -> Result<Vec<ScriptedPlayer>, ActionError> {
    scripts
        .iter()
        .enumerate()
        .map(|(seat, script)| ScriptedPlayer::from_script(format!("seat-{seat}"), script, chips))
        .collect()
}
