use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
Phase Accumulator
=================

Every waveform here is a function of a single normalized phase in [0, 1).
Each sample the phase advances by frequency / sample_rate and wraps at 1.0:

    phase   0.0 ───────────────→ 1.0 (wrap)
    sine     0   +1    0   -1    0
    saw     -1  -0.5   0  +0.5  +1 → -1
    square  +1  +1    -1   -1   +1
    tri     +1   0    -1    0   +1

Shapes are naive (no band-limiting). At the pitches the pad plays (C4-C5)
and behind the voice filter, aliasing stays well below the noise floor.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Square,
    Triangle,
}

impl Waveform {
    /// Evaluate the waveform at a normalized phase in [0, 1).
    #[inline]
    pub fn at(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }
}

pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
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
        self.waveform
    }

    /// Fill the buffer with the waveform at `ctx.frequency`.
    pub fn render(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        let increment = ctx.frequency / ctx.sample_rate;

        for sample in destination.iter_mut() {
            *sample = self.waveform.at(self.phase);
            self.phase += increment;
            if self.phase >= 1.0 {
                self.phase -= self.phase.floor();
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn render(waveform: Waveform, frequency: f32, len: usize) -> Vec<f32> {
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, frequency);
        let mut osc = OscillatorBlock::new(waveform);
        let mut buffer = vec![0.0; len];
        osc.render(&mut buffer, &ctx);
        buffer
    }

    #[test]
    fn sine_matches_closed_form() {
        let buffer = render(Waveform::Sine, 440.0, 128);

        for n in [0usize, 12, 64, 127] {
            let expected = (TAU * 440.0 * n as f32 / SAMPLE_RATE).sin();
            assert!(
                (buffer[n] - expected).abs() < 1e-4,
                "sample {n}: expected {expected}, got {}",
                buffer[n]
            );
        }
    }

    #[test]
    fn every_waveform_stays_in_unit_range() {
        for waveform in [
            Waveform::Sine,
            Waveform::Sawtooth,
            Waveform::Square,
            Waveform::Triangle,
        ] {
            let buffer = render(waveform, 523.25, 4096);
            assert!(
                buffer.iter().all(|s| (-1.0..=1.0).contains(s)),
                "{} left [-1, 1]",
                waveform.name()
            );
        }
    }

    #[test]
    fn square_spends_half_its_period_high() {
        // 480 Hz at 48 kHz = exactly 100 samples per period
        let buffer = render(Waveform::Square, 480.0, 1000);
        let high = buffer.iter().filter(|&&s| s > 0.0).count();
        assert!((480..=520).contains(&high), "high samples: {high}");
    }

    #[test]
    fn phase_wraps_for_high_frequencies() {
        // Above Nyquist the increment exceeds 1.0; output must stay finite
        let buffer = render(Waveform::Sawtooth, 60_000.0, 256);
        assert!(buffer.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
    }
}
