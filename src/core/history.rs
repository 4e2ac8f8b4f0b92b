//! Transition logging.
//!
//! Every input the machine accepts is recorded as a [`Transition`], labeled
//! with the input that caused it. The log is what a display layer renders:
//! the state path drives diagram highlighting and the input labels are the
//! arrow captions. Recording is immutable - `record` returns a new log -
//! following the pure-core style of the rest of this module.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted input.
///
/// Transitions are immutable values. Partial coin insertion produces a
/// self-loop (`Selected -> Selected`), which is recorded like any other
/// transition; ignored inputs are not recorded at all.
///
/// # Example
///
/// ```rust
/// use vendsim::core::Transition;
/// use vendsim::machine::{Input, VendState};
/// use chrono::Utc;
///
/// let transition = Transition {
///     from: VendState::Idle,
///     to: VendState::Selected,
///     input: Input::Select.to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.input, "Select");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Label of the input that caused the transition
    pub input: String,
    /// When the input was accepted
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of accepted transitions.
///
/// # Example
///
/// ```rust
/// use vendsim::core::{Transition, TransitionLog};
/// use vendsim::machine::{Input, VendState};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(Transition {
///     from: VendState::Idle,
///     to: VendState::Selected,
///     input: Input::Select.to_string(),
///     timestamp: Utc::now(),
/// });
/// let log = log.record(Transition {
///     from: VendState::Selected,
///     to: VendState::PaymentReceived,
///     input: Input::InsertCoin.to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = log.path();
/// assert_eq!(path.len(), 3); // Idle -> Selected -> PaymentReceived
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: Vec<Transition<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function - the existing log is left unchanged.
    pub fn record(&self, transition: Transition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state, then the
    /// `to` state of each transition. Empty if nothing was accepted yet.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last accepted input.
    ///
    /// Returns `None` if the log is empty. A display layer can show this as
    /// the running session length.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::{Input, VendState};

    use super::*;

    fn transition(from: VendState, to: VendState, input: Input) -> Transition<VendState> {
        Transition {
            from,
            to,
            input: input.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<VendState> = TransitionLog::new();
        assert_eq!(log.transitions().len(), 0);
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = TransitionLog::new();
        let new_log = log.record(transition(
            VendState::Idle,
            VendState::Selected,
            Input::Select,
        ));

        assert_eq!(log.transitions().len(), 0);
        assert_eq!(new_log.transitions().len(), 1);
    }

    #[test]
    fn path_includes_self_loops() {
        let mut log = TransitionLog::new();
        log = log.record(transition(
            VendState::Idle,
            VendState::Selected,
            Input::Select,
        ));
        // Partial payment loops on Selected.
        log = log.record(transition(
            VendState::Selected,
            VendState::Selected,
            Input::InsertCoin,
        ));
        log = log.record(transition(
            VendState::Selected,
            VendState::PaymentReceived,
            Input::InsertCoin,
        ));

        let path = log.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &VendState::Idle);
        assert_eq!(path[1], &VendState::Selected);
        assert_eq!(path[2], &VendState::Selected);
        assert_eq!(path[3], &VendState::PaymentReceived);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut log = TransitionLog::new();
        log = log.record(Transition {
            from: VendState::Idle,
            to: VendState::Selected,
            input: Input::Select.to_string(),
            timestamp: start,
        });
        log = log.record(Transition {
            from: VendState::Selected,
            to: VendState::Idle,
            input: Input::Cancel.to_string(),
            timestamp: start + chrono::Duration::milliseconds(250),
        });

        assert_eq!(log.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = TransitionLog::new().record(transition(
            VendState::Idle,
            VendState::Selected,
            Input::Select,
        ));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<VendState> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.transitions().len(), deserialized.transitions().len());
        assert_eq!(deserialized.transitions()[0].input, "Select");
    }
}
