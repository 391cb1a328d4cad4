use crate::{
    graph::{
        extensions::NodeExt,
        filter::FilterNode,
        gain::GainNode,
        node::{GraphNode, RenderCtx},
        oscillator::OscNode,
        through::Through,
    },
    host::{VoiceHandle, VoiceSpec},
};

/// Oscillator → filter → gain, the shape of every pad voice.
pub type VoiceGraph = Through<Through<OscNode, FilterNode>, GainNode>;

pub fn build_graph(spec: &VoiceSpec) -> VoiceGraph {
    OscNode::new(spec.waveform)
        .through(FilterNode::new(spec.filter, spec.cutoff_hz))
        .gain()
}

/// A voice living on the audio thread.
pub struct EngineVoice {
    handle: VoiceHandle,
    frequency: f32,
    graph: VoiceGraph,
    /// Frame at which the voice was started (for stealing).
    started_at: u64,
    /// Frame at which the oscillator stops, once a stop is scheduled.
    stop_at: Option<u64>,
}

impl EngineVoice {
    pub fn new(handle: VoiceHandle, spec: &VoiceSpec, sample_rate: f32, started_at: u64) -> Self {
        let mut graph = build_graph(spec);
        graph.note_on(&RenderCtx::from_freq(sample_rate, spec.frequency));

        Self {
            handle,
            frequency: spec.frequency,
            graph,
            started_at,
            stop_at: None,
        }
    }

    pub fn handle(&self) -> VoiceHandle {
        self.handle
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn stop_at(&self) -> Option<u64> {
        self.stop_at
    }

    pub fn gain(&self) -> f32 {
        self.graph.effect().level()
    }

    pub fn set_gain(&mut self, target: f32, ramp_seconds: f32) {
        self.graph.effect_mut().set_target(target, ramp_seconds);
    }

    /// Schedule the stop. The first schedule wins; stops are not cancellable.
    pub fn schedule_stop(&mut self, frame: u64) {
        if self.stop_at.is_none() {
            self.stop_at = Some(frame);
        }
    }

    /// Whether the stop has been reached by `frame`.
    pub fn is_stopped_at(&self, frame: u64) -> bool {
        self.stop_at.is_some_and(|stop| stop <= frame)
    }

    /// Render up to `out.len()` frames starting at `frame`, leaving any frames
    /// past the stop point untouched. Returns how many frames were rendered.
    pub fn render(&mut self, out: &mut [f32], sample_rate: f32, frame: u64) -> usize {
        let frames = match self.stop_at {
            Some(stop) => (stop.saturating_sub(frame) as usize).min(out.len()),
            None => out.len(),
        };

        let ctx = RenderCtx::from_freq(sample_rate, self.frequency)
            .at_time(frame as f64 / sample_rate as f64);
        self.graph.render_block(&mut out[..frames], &ctx);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{filter::FilterType, oscillator::Waveform};

    fn spec() -> VoiceSpec {
        VoiceSpec {
            waveform: Waveform::Sawtooth,
            filter: FilterType::LowPass,
            cutoff_hz: 800.0,
            frequency: 392.0,
        }
    }

    #[test]
    fn new_voice_starts_silent() {
        let mut voice = EngineVoice::new(VoiceHandle::new(1), &spec(), 48_000.0, 0);
        let mut buffer = vec![0.0; 64];
        voice.render(&mut buffer, 48_000.0, 0);

        assert_eq!(voice.gain(), 0.0);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn render_stops_exactly_at_stop_frame() {
        let mut voice = EngineVoice::new(VoiceHandle::new(1), &spec(), 48_000.0, 0);
        voice.set_gain(0.3, 0.0);
        voice.schedule_stop(100);

        let mut buffer = vec![0.0; 128];
        let rendered = voice.render(&mut buffer, 48_000.0, 64);

        assert_eq!(rendered, 36);
        assert!(buffer[36..].iter().all(|&s| s == 0.0));
        assert!(voice.is_stopped_at(100));
        assert!(!voice.is_stopped_at(99));
    }

    #[test]
    fn first_scheduled_stop_wins() {
        let mut voice = EngineVoice::new(VoiceHandle::new(1), &spec(), 48_000.0, 0);
        voice.schedule_stop(500);
        voice.schedule_stop(10_000);
        assert_eq!(voice.stop_at(), Some(500));
    }
}
