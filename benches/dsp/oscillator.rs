//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_pad::dsp::oscillator::{OscillatorBlock, Waveform};
use saavy_pad::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine uses sin(), the others are arithmetic only
        for waveform in [
            Waveform::Sine,
            Waveform::Sawtooth,
            Waveform::Square,
            Waveform::Triangle,
        ] {
            let mut osc = OscillatorBlock::new(waveform);
            group.bench_with_input(BenchmarkId::new(waveform.name(), size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
