//! Vendsim: a coin-operated vending machine modeled as a Moore machine
//!
//! Vendsim simulates the transaction lifecycle of a vending machine as a
//! Moore machine: the status line shown to the user is derived from the
//! current state, not from the input that caused the transition. The core is
//! pure and synchronous - no timers, no I/O - so a presentation layer can
//! drive it from button clicks and re-read the accessors after every call.
//!
//! # Core Concepts
//!
//! - **States**: the closed set `Idle -> Selected -> PaymentReceived ->
//!   Dispensing -> Idle`, via the [`core::State`] trait
//! - **Guards**: pure predicates deciding which inputs are legal in which
//!   states; illegal inputs are ignored, never errors
//! - **Inventory**: [`inventory::Product`] is mutated only when a
//!   transaction completes
//! - **Log**: every accepted input is recorded in a [`core::TransitionLog`]
//!   a display layer can render
//!
//! # Example
//!
//! ```rust
//! use vendsim::{Product, VendState, VendingMachine};
//!
//! let mut chips = Product::new("Chips", 20, 5).unwrap();
//! let mut machine = VendingMachine::new();
//!
//! machine.select_product(&chips);
//! assert_eq!(machine.current_state(), &VendState::Selected);
//!
//! // Four 5-unit coins cover the price of 20.
//! for _ in 0..4 {
//!     machine.insert_money();
//! }
//! assert_eq!(machine.current_state(), &VendState::PaymentReceived);
//!
//! machine.set_dispensing(&chips);
//! machine.complete_transaction(&mut chips);
//!
//! assert_eq!(machine.current_state(), &VendState::Idle);
//! assert_eq!(machine.output(), "Transaction Complete");
//! assert_eq!(chips.stock(), 4);
//! ```

pub mod core;
pub mod inventory;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Guard, State, Transition, TransitionLog};
pub use crate::inventory::{Product, ProductError};
pub use crate::machine::{Input, VendState, VendingMachine};
