//! Composable building blocks for constructing a voice.
//!
//! Graph nodes wrap the low-level DSP primitives with what a voice needs:
//! note events and block-based rendering. A pad voice is the chain
//! `OscNode → FilterNode → GainNode`, assembled with the fluent helpers in
//! `extensions`.

/// Fluent combinators (`.through()`, `.gain()`).
pub mod extensions;
/// Topology-preserving filter node with multiple responses.
pub mod filter;
/// Smoothed output gain.
pub mod gain;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use extensions::NodeExt;
pub use node::{GraphNode, RenderCtx};
