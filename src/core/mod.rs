//! Core Moore-machine vocabulary.
//!
//! This module contains the pure building blocks the vending machine is
//! assembled from:
//! - State definitions via the `State` trait
//! - Guard predicates deciding which inputs are legal in which states
//! - Immutable logging of accepted transitions
//!
//! Everything here is pure (no side effects); the imperative surface lives
//! in the `machine` and `inventory` modules.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{Transition, TransitionLog};
pub use state::State;
