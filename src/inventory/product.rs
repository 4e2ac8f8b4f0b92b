//! Sellable items and their stock.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when constructing a product.
///
/// Invalid construction is a programming error in the caller, so it is
/// rejected fast; everything after construction is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product price must be positive. '{name}' was given a price of 0")]
    ZeroPrice { name: String },
}

/// A sellable item: name, price, and remaining stock.
///
/// Prices and stock are in integral units - a price is a multiple of the
/// smallest coin denomination. Negative prices and stock are unrepresentable;
/// the one remaining construction-time violation, a zero price, is rejected
/// by [`Product::new`].
///
/// # Example
///
/// ```rust
/// use vendsim::Product;
///
/// let mut water = Product::new("Water", 15, 1).unwrap();
/// assert!(water.is_available());
/// assert_eq!(water.state_label(), "In Stock");
///
/// water.dispense();
/// assert_eq!(water.stock(), 0);
/// assert_eq!(water.state_label(), "Sold Out");
///
/// // Dispensing at zero stock is a safe no-op.
/// water.dispense();
/// assert_eq!(water.stock(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: u32,
    stock: u32,
}

impl Product {
    /// Create a product with a name, price, and starting stock.
    ///
    /// `price` must be positive; `initial_stock` may be zero (the product
    /// starts sold out).
    pub fn new(
        name: impl Into<String>,
        price: u32,
        initial_stock: u32,
    ) -> Result<Self, ProductError> {
        let name = name.into();
        if price == 0 {
            return Err(ProductError::ZeroPrice { name });
        }
        Ok(Self {
            name,
            price,
            stock: initial_stock,
        })
    }

    /// The product's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's price, in coin units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// How many items are left.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether at least one item is left.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Shelf label derived from stock: `"In Stock"` or `"Sold Out"`.
    pub fn state_label(&self) -> &'static str {
        if self.is_available() {
            "In Stock"
        } else {
            "Sold Out"
        }
    }

    /// Remove one item from stock.
    ///
    /// No-op at zero stock: callers are expected to check availability
    /// first, but the operation is safe to call regardless and never
    /// underflows.
    pub fn dispense(&mut self) {
        if self.stock > 0 {
            self.stock -= 1;
            debug!(product = %self.name, stock = self.stock, "dispensed");
        }
    }

    /// Add items to stock.
    ///
    /// The inventory itself has no capacity ceiling; capping a restock
    /// batch is a caller policy applied before this call.
    pub fn restock(&mut self, amount: u32) {
        self.stock += amount;
        debug!(product = %self.name, stock = self.stock, "restocked");
    }
}
