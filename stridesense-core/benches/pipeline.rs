//! Hot-path benchmarks for the sample pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stridesense_core::{MotionPipeline, SampleEvent, SensorCaps};

fn bench_acceleration_path(c: &mut Criterion) {
    let mut pipeline = MotionPipeline::new(SensorCaps::all());
    let mut toggle = false;

    c.bench_function("acceleration_sample", |b| {
        b.iter(|| {
            toggle = !toggle;
            let level = if toggle { 1.5 } else { 0.0 };
            black_box(pipeline.handle(SampleEvent::Acceleration {
                x: level,
                y: 0.0,
                z: 9.81,
                timestamp: 1_000,
            }))
        })
    });
}

fn bench_counter_path(c: &mut Criterion) {
    let mut pipeline = MotionPipeline::new(SensorCaps::all());
    let mut counter = 10_000.0f32;

    c.bench_function("counter_reading", |b| {
        b.iter(|| {
            counter += 1.0;
            black_box(pipeline.handle(SampleEvent::CounterReading {
                steps: counter,
                timestamp: 1_000,
            }))
        })
    });
}

criterion_group!(benches, bench_acceleration_path, bench_counter_path);
criterion_main!(benches);
