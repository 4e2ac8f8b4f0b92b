//! The vending machine itself.

use chrono::Utc;
use tracing::{debug, trace};

use crate::core::{Guard, State, Transition, TransitionLog};
use crate::inventory::Product;
use crate::machine::{Input, VendState};

const IDLE_OUTPUT: &str = "Select a Product";
const PAYMENT_OUTPUT: &str = "Payment Complete";
const COMPLETE_OUTPUT: &str = "Transaction Complete";

fn sold_out_output(name: &str) -> String {
    format!("{} - Sold Out!", name)
}

/// Value snapshot of the selected product, held for the duration of one
/// transaction. The machine never owns the product's lifecycle; it reads
/// price and availability at the call sites and commands a dispense only at
/// completion.
#[derive(Clone, Debug, PartialEq)]
struct Selection {
    name: String,
    price: u32,
}

/// A coin-operated vending machine modeled as a Moore machine.
///
/// The machine is created once per session in `Idle` and cycles through
/// `Selected`, `PaymentReceived`, and `Dispensing` back to `Idle`. After
/// every command the caller re-reads [`current_state`](Self::current_state),
/// [`output`](Self::output), and [`inserted_amount`](Self::inserted_amount)
/// to refresh its display.
///
/// Inputs that are illegal in the current state are ignored: state, output,
/// inserted amount, and transition log are all left unchanged. Refunds are
/// always returned to the caller, never silently dropped.
///
/// # Example
///
/// ```rust
/// use vendsim::{Product, VendState, VendingMachine};
///
/// let water = Product::new("Water", 15, 5).unwrap();
/// let mut machine = VendingMachine::new();
///
/// machine.select_product(&water);
/// machine.insert_money();
/// assert_eq!(machine.output(), "Inserted 5 / 15");
///
/// let refund = machine.cancel();
/// assert_eq!(refund, 5);
/// assert_eq!(machine.current_state(), &VendState::Idle);
/// ```
pub struct VendingMachine {
    state: VendState,
    output: String,
    inserted: u32,
    selected: Option<Selection>,
    log: TransitionLog<VendState>,
    selection_open: Guard<VendState>,
    coin_slot_open: Guard<VendState>,
    cancellable: Guard<VendState>,
    dispense_armed: Guard<VendState>,
    completable: Guard<VendState>,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// The fixed coin denomination: every insertion adds this much.
    pub const COIN_VALUE: u32 = 5;

    /// Create a machine in `Idle` with nothing inserted.
    pub fn new() -> Self {
        Self {
            state: VendState::Idle,
            output: IDLE_OUTPUT.to_string(),
            inserted: 0,
            selected: None,
            log: TransitionLog::new(),
            selection_open: Guard::new(|s: &VendState| !matches!(s, VendState::Dispensing)),
            coin_slot_open: Guard::new(|s: &VendState| matches!(s, VendState::Selected)),
            cancellable: Guard::new(|s: &VendState| {
                matches!(s, VendState::Selected | VendState::PaymentReceived)
            }),
            dispense_armed: Guard::new(|s: &VendState| matches!(s, VendState::PaymentReceived)),
            completable: Guard::new(|s: &VendState| matches!(s, VendState::Dispensing)),
        }
    }

    /// Select a product, starting a new transaction.
    ///
    /// Any money held for a previous selection is refunded and returned to
    /// the caller. An available product moves the machine to `Selected`; a
    /// sold-out product folds back to `Idle` with a sold-out output.
    /// Ignored while dispensing.
    pub fn select_product(&mut self, product: &Product) -> u32 {
        if !self.selection_open.check(&self.state) {
            trace!(state = %self.state, input = %Input::Select, "ignored input");
            return 0;
        }

        let refund = std::mem::take(&mut self.inserted);
        if product.is_available() {
            self.selected = Some(Selection {
                name: product.name().to_string(),
                price: product.price(),
            });
            self.transition(VendState::Selected, Input::Select);
            self.output = format!("{} Selected - {}", product.name(), product.price());
        } else {
            self.selected = None;
            self.transition(VendState::Idle, Input::Select);
            self.output = sold_out_output(product.name());
        }
        refund
    }

    /// Insert one coin of [`COIN_VALUE`](Self::COIN_VALUE).
    ///
    /// Returns `true` iff this coin completed the payment, moving the
    /// machine to `PaymentReceived`. While the running total is still short
    /// the machine stays in `Selected` with a progress output. Ignored
    /// (returning `false`) in every other state.
    pub fn insert_money(&mut self) -> bool {
        if !self.coin_slot_open.check(&self.state) {
            trace!(state = %self.state, input = %Input::InsertCoin, "ignored input");
            return false;
        }
        let price = match &self.selected {
            Some(selection) => selection.price,
            None => return false,
        };

        self.inserted += Self::COIN_VALUE;
        if self.inserted >= price {
            self.transition(VendState::PaymentReceived, Input::InsertCoin);
            self.output = PAYMENT_OUTPUT.to_string();
            true
        } else {
            self.transition(VendState::Selected, Input::InsertCoin);
            self.output = format!("Inserted {} / {}", self.inserted, price);
            false
        }
    }

    /// Cancel the in-progress transaction and return the refund amount.
    ///
    /// Legal from `Selected` and `PaymentReceived`; everywhere else it is
    /// ignored and returns 0. The refund is exactly the accumulated
    /// inserted amount.
    pub fn cancel(&mut self) -> u32 {
        if !self.cancellable.check(&self.state) {
            trace!(state = %self.state, input = %Input::Cancel, "ignored input");
            return 0;
        }

        let refund = std::mem::take(&mut self.inserted);
        self.selected = None;
        self.transition(VendState::Idle, Input::Cancel);
        self.output = IDLE_OUTPUT.to_string();
        refund
    }

    /// Begin dispensing the paid-for product.
    ///
    /// Legal only from `PaymentReceived`, and only for the product that is
    /// actually selected; anything else is ignored.
    pub fn set_dispensing(&mut self, product: &Product) {
        if !self.dispense_armed.check(&self.state) {
            trace!(state = %self.state, input = %Input::Dispense, "ignored input");
            return;
        }
        let matches_selection = self
            .selected
            .as_ref()
            .is_some_and(|s| s.name == product.name());
        if !matches_selection {
            trace!(
                state = %self.state,
                product = product.name(),
                "ignored input: product does not match selection"
            );
            return;
        }

        self.transition(VendState::Dispensing, Input::Dispense);
        self.output = format!("Dispensing {}...", product.name());
    }

    /// Finish the transaction: dispense from inventory and return to `Idle`.
    ///
    /// This is the single point where inventory is mutated, so stock is
    /// decremented exactly once per completed purchase. The output reports
    /// completion, or sold-out when this purchase emptied the shelf.
    /// Ignored outside `Dispensing`.
    pub fn complete_transaction(&mut self, product: &mut Product) {
        if !self.completable.check(&self.state) {
            trace!(state = %self.state, input = %Input::Complete, "ignored input");
            return;
        }

        product.dispense();
        self.inserted = 0;
        self.selected = None;
        self.transition(VendState::Idle, Input::Complete);
        self.output = if product.is_available() {
            COMPLETE_OUTPUT.to_string()
        } else {
            sold_out_output(product.name())
        };
    }

    /// Return the machine to its initial condition from any state.
    ///
    /// The inserted amount is zeroed without being reported; callers that
    /// owe a refund use [`cancel`](Self::cancel) instead.
    pub fn reset(&mut self) {
        self.inserted = 0;
        self.selected = None;
        self.transition(VendState::Idle, Input::Reset);
        self.output = IDLE_OUTPUT.to_string();
    }

    /// The current state.
    pub fn current_state(&self) -> &VendState {
        &self.state
    }

    /// The status line derived from the current state.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Money held for the current transaction, in coin units.
    pub fn inserted_amount(&self) -> u32 {
        self.inserted
    }

    /// Name of the currently selected product, if any.
    pub fn selected_product(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.name.as_str())
    }

    /// The log of every accepted input this session.
    pub fn log(&self) -> &TransitionLog<VendState> {
        &self.log
    }

    fn transition(&mut self, to: VendState, input: Input) {
        debug!(from = self.state.name(), to = to.name(), input = %input, "transition");
        self.log = self.log.record(Transition {
            from: self.state.clone(),
            to: to.clone(),
            input: input.to_string(),
            timestamp: Utc::now(),
        });
        self.state = to;
    }
}
