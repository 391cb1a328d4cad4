//! Benchmarks for the pad's DSP primitives and playing scenarios.
//!
//! Run with: cargo bench
//!
//! Everything here runs inside the audio callback, so it has to finish well
//! within the real-time deadline of one block.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Oscillator, filter and gain ramp primitives
//!   - scenarios/*  A held voice, and a drag retriggering across the pad

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_filter,
    dsp::bench_ramp,
    // Playing scenarios
    scenarios::bench_voice,
    scenarios::bench_retrigger,
);
criterion_main!(benches);
