/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
/// - time: Playback time of the first frame in the block, in seconds
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub time: f64,
}

impl RenderCtx {
    /// Create context from a frequency picked off the pad's scale
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            time: 0.0,
        }
    }

    /// Same context, stamped with the block's start time
    pub fn at_time(self, time: f64) -> Self {
        Self { time, ..self }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes can render audio and respond to musical events
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Default: do nothing
    }
}
