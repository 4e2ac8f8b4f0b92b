//! Product inventory.
//!
//! One [`Product`] per sellable item. Stock only moves through `dispense`
//! and `restock`; the machine commands a dispense exactly once per
//! completed transaction. Availability and the shelf label are derived from
//! stock on demand, so they can never disagree with it.

mod product;

pub use product::{Product, ProductError};
