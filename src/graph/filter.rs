use crate::{
    dsp::filter::{FilterType, SVFilter},
    graph::node::{GraphNode, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

Each timbre preset pins one filter at a fixed cutoff, chosen once when the
voice is created. It is not swept by the pointer.

  Lowpass (LP): passes frequencies BELOW the cutoff.
    - Warm Pad (800 Hz), Lofi Dreams (400 Hz), Ambient Choir (600 Hz)
    - Lower cutoff = darker, muffled sound

  Highpass (HP): passes frequencies ABOVE the cutoff.
    - Ethereal Bells (200 Hz): thins out the sine's body

  Bandpass (BP): passes frequencies AROUND the cutoff.
    - Synth Wave (1000 Hz): focused, "telephone" square

The SVF uses a "TPT" (topology-preserving transform), so a cutoff anywhere in
the audio band is stable and every response comes out of the same two
integrators.
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            filter: SVFilter::new(filter_type, cutoff_hz),
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::HighPass, cutoff_hz)
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::BandPass, cutoff_hz)
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.filter.cutoff_hz
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.filter.reset();
    }
}
