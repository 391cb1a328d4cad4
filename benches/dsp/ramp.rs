//! Benchmarks for the exponential gain ramp.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_pad::dsp::ramp::GainRamp;
use saavy_pad::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ramp");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.5f32; size];

        // Toggle the target so the ramp never settles
        let mut ramp = GainRamp::new(0.0);
        let mut rising = true;
        group.bench_with_input(BenchmarkId::new("approach", size), &size, |b, _| {
            b.iter(|| {
                ramp.set_target(if rising { 0.3 } else { 0.0 }, 0.1);
                rising = !rising;
                ramp.render(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
