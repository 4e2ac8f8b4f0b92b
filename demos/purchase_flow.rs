//! Happy-Path Purchase
//!
//! This demo walks one complete transaction through the Moore machine.
//!
//! Key concepts:
//! - Selection opens the coin slot
//! - Payment accumulates one coin at a time
//! - Stock is decremented exactly once, at completion
//! - The output line is re-read after every call (Moore property)
//!
//! Run with: cargo run --example purchase_flow

use vendsim::core::State;
use vendsim::{Product, VendingMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Happy-Path Purchase ===\n");

    let mut chips = Product::new("Chips", 20, 5).unwrap();
    let water = Product::new("Water", 15, 5).unwrap();
    let mut machine = VendingMachine::new();

    println!("Catalog:");
    for product in [&chips, &water] {
        println!(
            "  {} - {} ({}, stock {})",
            product.name(),
            product.price(),
            product.state_label(),
            product.stock()
        );
    }
    println!("\nDisplay: {}\n", machine.output());

    println!("Pressing the Chips button:");
    machine.select_product(&chips);
    println!("  Display: {}\n", machine.output());

    println!("Inserting coins of {}:", VendingMachine::COIN_VALUE);
    while !machine.insert_money() {
        println!("  Display: {}", machine.output());
    }
    println!("  Display: {}\n", machine.output());

    // A real front panel would animate between these two calls; the core
    // holds no timers, so the delay lives out here.
    machine.set_dispensing(&chips);
    println!("Display: {}", machine.output());

    machine.complete_transaction(&mut chips);
    println!("Display: {}", machine.output());
    println!("Output tray: {}\n", chips.name());

    println!("Chips stock is now {}", chips.stock());

    let path: Vec<&str> = machine.log().path().iter().map(|s| s.name()).collect();
    println!("States traversed: {}", path.join(" -> "));

    println!("\n=== Demo Complete ===");
}
