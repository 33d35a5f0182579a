//! Basic step tracking
//!
//! Feeds a short cumulative-counter trace through the pipeline and prints
//! the visible step total after each reading. Demonstrates baseline
//! calibration: the counter starts deep into its device-lifetime count,
//! but the session total starts at zero.
//!
//! Run with: cargo run --example 01_step_tracking

use stridesense_core::{MotionPipeline, SampleEvent, SensorCaps, Update};

fn main() {
    let mut pipeline = MotionPipeline::new(SensorCaps {
        step_counter: true,
        step_detector: false,
        accelerometer: false,
    });

    // Device-lifetime counter values as the hardware would batch them
    let readings = [48_211.0, 48_211.0, 48_219.0, 48_240.0, 48_233.0, 48_251.0];

    println!("Step Tracking Example");
    println!("=====================\n");

    for (i, steps) in readings.iter().enumerate() {
        let timestamp = (i as u64 + 1) * 2_000;
        let updates = pipeline.handle(SampleEvent::CounterReading {
            steps: *steps,
            timestamp,
        });

        print!("reading {:>9.0} -> ", steps);
        if updates.is_empty() {
            println!("no change (calibration or ratchet)");
        }
        for update in updates {
            if let Update::StepTotal { total, .. } = update {
                println!("total {} steps", total);
            }
        }
    }

    let snapshot = pipeline.snapshot();
    println!("\nFinal total: {} steps", snapshot.steps);
}
