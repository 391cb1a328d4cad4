//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the
//! signal-processing math so graph nodes can layer on note handling.

/// State-variable filter implementation with multiple responses.
pub mod filter;
/// Audio-rate oscillator waveforms.
pub mod oscillator;
/// Exponential approach to a target gain.
pub mod ramp;

pub use filter::FilterType;
pub use oscillator::Waveform;
pub use ramp::GainRamp;
