use crate::{
    dsp::ramp::GainRamp,
    graph::node::{GraphNode, RenderCtx},
};

/// Output gain stage of a voice.
///
/// Processes in place like a filter: whatever the source rendered gets scaled
/// by a [`GainRamp`], so level changes glide instead of clicking.
pub struct GainNode {
    ramp: GainRamp,
}

impl GainNode {
    /// Start fully closed; the first `set_target` fades the voice in.
    pub fn silent() -> Self {
        Self {
            ramp: GainRamp::new(0.0),
        }
    }

    pub fn set_target(&mut self, target: f32, time_constant: f32) {
        self.ramp.set_target(target, time_constant);
    }

    pub fn level(&self) -> f32 {
        self.ramp.value()
    }

    pub fn target(&self) -> f32 {
        self.ramp.target()
    }
}

impl GraphNode for GainNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.ramp.render(out, ctx);
    }
}
