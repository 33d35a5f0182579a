//! Degraded-mode handling
//!
//! Shows capability probing: a device with no step sensors still builds a
//! working pipeline, and the snapshot carries the flag the presentation
//! layer needs to render its fallback.
//!
//! Run with: cargo run --example 03_degraded_mode

use stridesense_core::{MotionPipeline, SensorCaps};

fn main() {
    println!("Degraded Mode Example");
    println!("=====================\n");

    for (name, caps) in [
        ("full hardware", SensorCaps::all()),
        (
            "counter only",
            SensorCaps {
                step_counter: true,
                step_detector: false,
                accelerometer: false,
            },
        ),
        (
            "detector only",
            SensorCaps {
                step_counter: false,
                step_detector: true,
                accelerometer: true,
            },
        ),
        ("no sensors", SensorCaps::none()),
    ] {
        let pipeline = MotionPipeline::new(caps);
        let snapshot = pipeline.snapshot();

        println!(
            "{:<14} step tracking available: {}",
            name, snapshot.step_tracking_available
        );
    }
}
