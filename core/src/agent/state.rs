//! Turn state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Where a single chat turn currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnState {
    /// A request is in flight to the model
    AwaitingModel,
    /// The model asked for a function; it is being dispatched
    AwaitingToolResult,
    /// A final answer (possibly the fallback) was produced
    Done,
    /// The turn aborted with an error
    Failed,
}

impl TurnState {
    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(self, next: TurnState) -> bool {
        use TurnState::*;
        matches!(
            (self, next),
            (AwaitingModel, AwaitingToolResult)
                | (AwaitingModel, Done)
                | (AwaitingModel, Failed)
                | (AwaitingToolResult, AwaitingModel)
                | (AwaitingToolResult, Failed)
        )
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnState::AwaitingModel => "AWAITING_MODEL",
            TurnState::AwaitingToolResult => "AWAITING_TOOL_RESULT",
            TurnState::Done => "DONE",
            TurnState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Tracks the current state of a turn and counts tool round trips
#[derive(Debug, Clone)]
pub struct StateTracker {
    state: TurnState,
    round_trips: usize,
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            state: TurnState::AwaitingModel,
            round_trips: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Completed or in-progress function-call round trips
    pub fn round_trips(&self) -> usize {
        self.round_trips
    }

    /// Move to `next`; illegal transitions are ignored and logged.
    ///
    /// Returns whether the transition happened.
    pub fn advance(&mut self, next: TurnState) -> bool {
        if !self.state.can_transition_to(next) {
            debug!(from = %self.state, to = %next, "Ignoring illegal turn transition");
            return false;
        }

        if next == TurnState::AwaitingToolResult {
            self.round_trips += 1;
        }
        debug!(from = %self.state, to = %next, round_trips = self.round_trips, "Turn state");
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_call_cycle() {
        let mut tracker = StateTracker::new();
        assert!(tracker.advance(TurnState::AwaitingToolResult));
        assert!(tracker.advance(TurnState::AwaitingModel));
        assert!(tracker.advance(TurnState::Done));
        assert_eq!(tracker.state(), TurnState::Done);
        assert_eq!(tracker.round_trips(), 1);
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let mut tracker = StateTracker::new();
        assert!(tracker.advance(TurnState::Failed));
        assert!(!tracker.advance(TurnState::AwaitingModel));
        assert!(!tracker.advance(TurnState::Done));
        assert_eq!(tracker.state(), TurnState::Failed);
    }

    #[test]
    fn test_cannot_finish_while_awaiting_tool() {
        assert!(!TurnState::AwaitingToolResult.can_transition_to(TurnState::Done));
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_value(TurnState::AwaitingToolResult).unwrap();
        assert_eq!(json, TurnState::AwaitingToolResult.to_string());
    }
}
