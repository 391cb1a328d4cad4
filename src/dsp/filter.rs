use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
| type      | passes          | rejects            |
| --------- | --------------- | ------------------ |
| low-pass  | below cutoff    | above cutoff       |
| high-pass | above cutoff    | below cutoff       |
| band-pass | around cutoff   | both sides         |
*/

/// Damping that gives a maximally flat (Butterworth, Q ≈ 0.707) response.
pub const BUTTERWORTH_RESONANCE: f32 = 1.0 - std::f32::consts::FRAC_1_SQRT_2;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
}

impl FilterType {
    pub fn name(self) -> &'static str {
        match self {
            FilterType::LowPass => "lowpass",
            FilterType::HighPass => "highpass",
            FilterType::BandPass => "bandpass",
        }
    }
}

pub struct FilterOutputs {
    pub lowpass: f32,
    pub bandpass: f32,
    pub highpass: f32,
}

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub resonance: f32,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            resonance: BUTTERWORTH_RESONANCE,
            filter_type,
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
        self.filter_type
    }

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        // Keep the prewarp away from Nyquist where tan() blows up
        let cutoff = self.cutoff_hz.clamp(1.0, ctx.sample_rate * 0.49);
        let wd = TAU * cutoff;
        let wa = (2.0 * ctx.sample_rate) * (wd / (2.0 * ctx.sample_rate)).tan();
        wa / (2.0 * ctx.sample_rate)
    }

    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> FilterOutputs {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        FilterOutputs {
            lowpass: v2,
            bandpass: v1,
            highpass: sample - k * v1 - v2,
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = 2.0 - (2.0 * self.resonance);

        for sample in buffer.iter_mut() {
            let outputs = self.next_sample(*sample, k, g);

            *sample = match self.filter_type {
                FilterType::LowPass => outputs.lowpass,
                FilterType::HighPass => outputs.highpass,
                FilterType::BandPass => outputs.bandpass,
            }
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::OscillatorBlock;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(256);
        buffer
            .get(skip..)
            .unwrap_or(buffer)
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    fn filtered_sine_peak(filter: &mut SVFilter, frequency: f32) -> f32 {
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, frequency);
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; 4096];
        osc.render(&mut buffer, &ctx);
        filter.render(&mut buffer, &ctx);
        peak_after_transient(&buffer)
    }

    #[test]
    fn lowpass_passes_dc() {
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = vec![1.0; 2048];
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0);

        filter.render(&mut buffer, &ctx);

        assert!(buffer[2047] > 0.99, "got {}", buffer[2047]);
    }

    #[test]
    fn highpass_blocks_dc() {
        let mut filter = SVFilter::highpass(500.0);
        let mut buffer = vec![1.0; 2048];
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0);

        filter.render(&mut buffer, &ctx);

        assert!(buffer[2047].abs() < 0.001, "got {}", buffer[2047]);
    }

    #[test]
    fn lowpass_attenuates_far_above_cutoff() {
        let mut filter = SVFilter::lowpass(400.0);
        let peak = filtered_sine_peak(&mut filter, 4_000.0);
        assert!(peak < 0.05, "expected strong attenuation, got peak {peak}");
    }

    #[test]
    fn highpass_keeps_notes_above_cutoff() {
        let mut filter = SVFilter::highpass(200.0);
        let peak = filtered_sine_peak(&mut filter, 523.25);
        assert!(peak > 0.8, "expected C5 to pass a 200 Hz highpass, got {peak}");
    }

    #[test]
    fn bandpass_emphasizes_cutoff_frequency() {
        let mut filter = SVFilter::bandpass(1_000.0);
        let pass_peak = filtered_sine_peak(&mut filter, 1_000.0);

        filter.reset();
        let off_peak = filtered_sine_peak(&mut filter, 100.0);

        assert!(
            pass_peak > off_peak * 2.0,
            "expected bandpass to emphasize cutoff freq, got pass_peak={pass_peak}, off_peak={off_peak}"
        );
    }

    #[test]
    fn cutoff_above_nyquist_stays_stable() {
        let mut filter = SVFilter::lowpass(40_000.0);
        let peak = filtered_sine_peak(&mut filter, 440.0);
        assert!(peak.is_finite());
    }

    #[test]
    fn cutoff_affects_filtering() {
        let low_cutoff = filtered_sine_peak(&mut SVFilter::lowpass(200.0), 1_000.0);
        let high_cutoff = filtered_sine_peak(&mut SVFilter::lowpass(5_000.0), 1_000.0);

        assert!(
            high_cutoff > low_cutoff * 2.0,
            "high cutoff should pass more signal: high={high_cutoff}, low={low_cutoff}"
        );
    }
}
