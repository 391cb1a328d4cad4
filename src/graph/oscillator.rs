use crate::dsp::oscillator::{OscillatorBlock, Waveform};
use crate::graph::node::{GraphNode, RenderCtx};

/*
Audio Oscillator
================

The oscillator is the voice's only sound source. Its waveform is the biggest
single ingredient of a timbre preset:

Sine: a single frequency with no harmonics.
  - Sound: Smooth, hollow, flute-like
  - Presets: Ethereal Bells, Ambient Choir

Sawtooth: all harmonics, falling off as 1/n.
  - Sound: Bright, buzzy, brassy
  - Presets: Warm Pad (tamed by a lowpass)

Square: odd harmonics only, falling off as 1/n.
  - Sound: Hollow, woody, clarinet-like
  - Presets: Synth Wave (through a bandpass)

Triangle: odd harmonics falling off as 1/n².
  - Sound: Soft, between sine and square
  - Presets: Lofi Dreams

The filter that follows decides which of those harmonics survive.

Example usage:
  let voice = OscNode::new(Waveform::Sawtooth)
      .through(FilterNode::lowpass(800.0))
      .gain();
*/

pub struct OscNode {
    osc: OscillatorBlock,
}

impl OscNode {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Sawtooth)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn waveform(&self) -> Waveform {
        self.osc.waveform()
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Every note starts from phase zero so retriggers line up
        self.osc.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::from_freq(sample_rate, 392.0);
        let mut synth = OscNode::sine();

        let mut buffer = vec![0.0f32; 128];
        synth.render_block(&mut buffer, &ctx);

        // sample n should be sin(2pi f n / sr)
        let sample_index = 12;
        let expected = (TAU * ctx.frequency * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn note_on_restarts_phase() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0);
        let mut osc = OscNode::sawtooth();

        let mut first = vec![0.0f32; 64];
        osc.render_block(&mut first, &ctx);

        osc.note_on(&ctx);
        let mut second = vec![0.0f32; 64];
        osc.render_block(&mut second, &ctx);

        assert_eq!(first, second);
    }
}
