//! States and inputs of the vending machine.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four states of the transaction lifecycle.
///
/// Error conditions (sold-out selection, completion that empties the shelf)
/// fold back to `Idle` with a descriptive output rather than occupying a
/// separate terminal state, so the machine cycles indefinitely.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum VendState {
    /// No transaction in progress; waiting for a selection.
    Idle,
    /// A product is selected; the coin slot is open.
    Selected,
    /// Enough money has been inserted to cover the price.
    PaymentReceived,
    /// The product is on its way to the output tray.
    Dispensing,
}

impl State for VendState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Selected => "Selected",
            Self::PaymentReceived => "PaymentReceived",
            Self::Dispensing => "Dispensing",
        }
    }

    fn is_initial(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for VendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The input alphabet of the machine.
///
/// Used to label recorded transitions; the labels are what a diagram
/// renderer captions its arrows with.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Input {
    Select,
    InsertCoin,
    Cancel,
    Dispense,
    Complete,
    Reset,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Select => "Select",
            Self::InsertCoin => "InsertCoin",
            Self::Cancel => "Cancel",
            Self::Dispense => "Dispense",
            Self::Complete => "Complete",
            Self::Reset => "Reset",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_state_name() {
        assert_eq!(VendState::Idle.to_string(), "Idle");
        assert_eq!(VendState::PaymentReceived.to_string(), "PaymentReceived");
    }

    #[test]
    fn input_labels_are_stable() {
        assert_eq!(Input::Select.to_string(), "Select");
        assert_eq!(Input::InsertCoin.to_string(), "InsertCoin");
        assert_eq!(Input::Cancel.to_string(), "Cancel");
        assert_eq!(Input::Dispense.to_string(), "Dispense");
        assert_eq!(Input::Complete.to_string(), "Complete");
        assert_eq!(Input::Reset.to_string(), "Reset");
    }

    #[test]
    fn input_serializes_correctly() {
        let input = Input::InsertCoin;
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: Input = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
