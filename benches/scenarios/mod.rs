//! Real-world scenario benchmarks.
//!
//! These model how the pad is actually played: one voice held in place, and
//! a fast drag that retriggers on every step while release tails ring out.

mod retrigger;
mod voice;

pub use retrigger::bench_retrigger;
pub use voice::bench_voice;
