//! Core State trait for Moore machine states.
//!
//! Every state a machine can occupy implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for Moore machine states.
///
/// All methods are pure - no side effects. States are immutable values
/// describing the current position in the transaction lifecycle; in a Moore
/// machine the user-visible output is derived from the state alone, so the
/// state set is closed and exhaustively matchable.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for transition logging
/// - `PartialEq`: states must be comparable for guard checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so a caller
///   can persist or ship a session trace
///
/// # Example
///
/// ```rust
/// use vendsim::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Locked,
///     Open,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_initial(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert!(DoorState::Locked.is_initial());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display, logging, and diagram rendering.
    fn name(&self) -> &str;

    /// Check if this is the initial (resting) state.
    ///
    /// The machine returns here after completion, cancellation, and reset.
    ///
    /// Default implementation returns `false`.
    fn is_initial(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::VendState;

    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(VendState::Idle.name(), "Idle");
        assert_eq!(VendState::Selected.name(), "Selected");
        assert_eq!(VendState::PaymentReceived.name(), "PaymentReceived");
        assert_eq!(VendState::Dispensing.name(), "Dispensing");
    }

    #[test]
    fn only_idle_is_initial() {
        assert!(VendState::Idle.is_initial());
        assert!(!VendState::Selected.is_initial());
        assert!(!VendState::PaymentReceived.is_initial());
        assert!(!VendState::Dispensing.is_initial());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = VendState::PaymentReceived;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: VendState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(VendState::Selected, VendState::Selected);
        assert_ne!(VendState::Selected, VendState::Dispensing);
    }
}
