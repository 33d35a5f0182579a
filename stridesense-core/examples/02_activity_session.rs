//! Activity classification and session gating
//!
//! Simulates a rest / walk / run sequence on the accelerometer while the
//! step counter keeps ticking, and shows how the session counter only
//! credits steps taken while active.
//!
//! Run with: cargo run --example 02_activity_session

use stridesense_core::{MotionPipeline, SampleEvent, SensorCaps, Update};

/// Push an alternating-magnitude burst that settles the smoothed jitter
/// at `jitter`, printing any activity transitions.
fn simulate_activity(
    pipeline: &mut MotionPipeline,
    jitter: f32,
    timestamp: &mut u64,
) {
    let mut high = false;
    for _ in 0..400 {
        high = !high;
        *timestamp += 20;
        let updates = pipeline.handle(SampleEvent::Acceleration {
            x: if high { jitter } else { 0.0 },
            y: 0.0,
            z: 0.0,
            timestamp: *timestamp,
        });
        for update in updates {
            if let Update::Activity { state, .. } = update {
                println!("  activity -> {}", state.label());
            }
        }
    }
}

fn advance_counter(
    pipeline: &mut MotionPipeline,
    counter: &mut f32,
    steps: f32,
    timestamp: &mut u64,
) {
    *counter += steps;
    *timestamp += 500;
    pipeline.handle(SampleEvent::CounterReading {
        steps: *counter,
        timestamp: *timestamp,
    });
}

fn main() {
    let mut pipeline = MotionPipeline::new(SensorCaps::all());
    let mut counter = 9_000.0;
    let mut timestamp = 0;

    println!("Activity Session Example");
    println!("========================\n");

    println!("phone on the table:");
    simulate_activity(&mut pipeline, 0.1, &mut timestamp);
    advance_counter(&mut pipeline, &mut counter, 0.0, &mut timestamp);

    println!("walking to the station (40 steps):");
    simulate_activity(&mut pipeline, 1.5, &mut timestamp);
    advance_counter(&mut pipeline, &mut counter, 40.0, &mut timestamp);

    println!("running for the train (120 steps):");
    simulate_activity(&mut pipeline, 8.0, &mut timestamp);
    advance_counter(&mut pipeline, &mut counter, 120.0, &mut timestamp);

    println!("waiting on the platform (12 restless steps):");
    simulate_activity(&mut pipeline, 0.1, &mut timestamp);
    advance_counter(&mut pipeline, &mut counter, 12.0, &mut timestamp);

    let snapshot = pipeline.snapshot();
    println!("\ntotal steps:   {}", snapshot.steps);
    println!("session steps: {} (platform steps not credited)", snapshot.session_steps);
    println!("activity:      {}", snapshot.activity.label());
}
