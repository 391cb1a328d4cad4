//! Click-free gain changes.

use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Exponential Approach ("set target at time")
===========================================

Jumping a gain straight from 0.0 to 0.3 puts a step into the waveform, which
we hear as a click. Instead the gain chases its target exponentially:

    gain[n+1] = gain[n] + (target - gain[n]) * (1 - e^(-1 / (tau * sample_rate)))

  tau         The time constant in seconds. After one tau the gain has covered
              ~63% of the distance to the target, after three ~95%.

  Level
    0.3 ┤            ____________________
        │        .-''
        │     .-'
        │   .'
        │  /
    0.0 ┼─┴──────┬──────┬──────┬─────→ Time
              1 tau  2 tau  3 tau

The curve never lands exactly on the target, which is why a voice being torn
down also gets a hard stop scheduled a little later.

The coefficient only depends on tau and the sample rate, so it is computed
once per block rather than per sample.
*/

pub struct GainRamp {
    value: f32,
    target: f32,
    time_constant: f32,
}

impl GainRamp {
    /// A ramp resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            time_constant: 0.0,
        }
    }

    /// Start chasing `target` with time constant `time_constant` seconds.
    ///
    /// A time constant at or below one sample jumps immediately.
    pub fn set_target(&mut self, target: f32, time_constant: f32) {
        self.target = target;
        self.time_constant = time_constant;
        if time_constant <= MIN_TIME {
            self.value = target;
        }
    }

    #[inline]
    fn coefficient(&self, sample_rate: f32) -> f32 {
        if self.time_constant <= MIN_TIME {
            1.0
        } else {
            1.0 - (-1.0 / (self.time_constant * sample_rate)).exp()
        }
    }

    /// Advance by one sample and return the new gain.
    #[inline]
    pub fn next_sample(&mut self, coefficient: f32) -> f32 {
        self.value += (self.target - self.value) * coefficient;
        self.value
    }

    /// Multiply the buffer in place by the evolving gain.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let coefficient = self.coefficient(ctx.sample_rate);
        for sample in buffer.iter_mut() {
            *sample *= self.next_sample(coefficient);
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}
