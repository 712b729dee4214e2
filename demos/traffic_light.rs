//! Traffic Light Controller
//!
//! This example drives a controller with synthetic time, the way a test or
//! a replay tool would.
//!
//! Key concepts:
//! - The controller has no clock; the caller supplies elapsed time
//! - Large deltas catch up through every phase they span
//! - Pausing drops time, stepping forces a change
//! - Timings and sequence can change between calls
//!
//! Run with: cargo run --example traffic_light

use signal_controller::{Controller, Sequence, SignalConfig};
use std::time::Duration;

fn main() {
    println!("=== Traffic Light Controller ===\n");

    let uk = SignalConfig::new(6, 6, 2, Sequence::Uk);
    let mut controller = Controller::new();
    controller.start(&uk);
    println!("Started:        {}", controller.snapshot());

    println!("\nOne UK cycle in quarter-second ticks:");
    let mut last = controller.phase();
    for _ in 0..(16 * 4) {
        controller.advance(Duration::from_millis(250), &uk);
        if controller.phase() != last {
            println!("  {}", controller.snapshot());
            last = controller.phase();
        }
    }

    println!("\nSuspended for 20.5s, then one catch-up call:");
    let fired = controller.advance(Duration::from_millis(20_500), &uk);
    println!("  {fired} transitions, now {}", controller.snapshot());
    println!("  carried over: {:?}", controller.carry());

    println!("\nPaused; an hour of ticks is dropped:");
    controller.pause();
    controller.advance(Duration::from_secs(3600), &uk);
    println!("  {}", controller.snapshot());

    println!("\nManual steps while paused:");
    for _ in 0..3 {
        controller.step(&uk);
        println!("  {}", controller.snapshot());
    }

    println!("\nSwitch to the simple sequence and resume:");
    let simple = uk.with_sequence(Sequence::Simple);
    controller.resume();
    for _ in 0..3 {
        let remaining = controller.remaining_seconds().max(1);
        controller.advance(Duration::from_secs(remaining), &simple);
        println!("  {}", controller.snapshot());
    }

    println!("\nHistory path: {:?}", controller.history().get_path());

    controller.reset(&uk);
    println!("\nReset:          {}", controller.snapshot());

    println!("\n=== Example Complete ===");
}
