//! Cancellation and Refunds
//!
//! This demo shows the two ways money comes back out of the machine:
//! pressing cancel, and switching the selection mid-payment. Refund amounts
//! are always returned to the caller, never silently dropped.
//!
//! Run with: cargo run --example cancellation

use vendsim::{Product, VendingMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Cancellation and Refunds ===\n");

    let chips = Product::new("Chips", 20, 5).unwrap();
    let water = Product::new("Water", 15, 5).unwrap();
    let mut machine = VendingMachine::new();

    println!("Scenario 1: cancel mid-payment");
    machine.select_product(&chips);
    machine.insert_money();
    machine.insert_money();
    println!("  Display: {}", machine.output());

    let refund = machine.cancel();
    println!("  Cancel pressed - refund: {}", refund);
    println!("  Display: {}\n", machine.output());

    println!("Scenario 2: switch product mid-payment");
    machine.select_product(&chips);
    machine.insert_money();
    println!("  Display: {}", machine.output());

    let refund = machine.select_product(&water);
    println!("  Water pressed - refund: {}", refund);
    println!("  Display: {}\n", machine.output());

    println!("Scenario 3: cancel with nothing inserted");
    let refund = machine.cancel();
    println!("  Cancel pressed - refund: {}", refund);
    println!("  Display: {}\n", machine.output());

    println!("Key Takeaways:");
    println!("- cancel() returns exactly the accumulated amount");
    println!("- A new selection refunds the previous transaction first");
    println!("- Cancelling an idle machine is an ignored input, not an error");

    println!("\n=== Demo Complete ===");
}
