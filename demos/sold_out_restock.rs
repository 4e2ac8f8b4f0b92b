//! Sold Out and Restock
//!
//! This demo empties a shelf, shows the sold-out fold-back to Idle, and
//! restocks with a caller-side cap. The inventory itself never enforces a
//! ceiling; the operator decides how many items fit before calling
//! `restock`.
//!
//! Run with: cargo run --example sold_out_restock

use vendsim::{Product, VendingMachine};

const MAX_STOCK: u32 = 10;
const RESTOCK_BATCH: u32 = 5;

fn buy(machine: &mut VendingMachine, product: &mut Product) {
    machine.select_product(product);
    while !machine.insert_money() {}
    machine.set_dispensing(product);
    machine.complete_transaction(product);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Sold Out and Restock ===\n");

    let mut water = Product::new("Water", 15, 2).unwrap();
    let mut machine = VendingMachine::new();

    println!("Water starts with stock {}\n", water.stock());

    println!("Buying until the shelf is empty:");
    buy(&mut machine, &mut water);
    println!("  Display: {} (stock {})", machine.output(), water.stock());
    buy(&mut machine, &mut water);
    println!("  Display: {} (stock {})\n", machine.output(), water.stock());

    println!("Selecting sold-out Water:");
    machine.select_product(&water);
    println!("  Display: {}", machine.output());
    println!("  Shelf label: {}\n", water.state_label());

    // Operator restock: the cap is a policy decision made out here.
    let batch = RESTOCK_BATCH.min(MAX_STOCK - water.stock());
    println!("Restocking {} (batch {} capped at {})", batch, RESTOCK_BATCH, MAX_STOCK);
    water.restock(batch);
    machine.reset();

    println!("  Shelf label: {} (stock {})", water.state_label(), water.stock());
    println!("  Display: {}", machine.output());

    println!("\n=== Demo Complete ===");
}
