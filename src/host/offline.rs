//! A host that renders on demand instead of on a device clock.
//!
//! The context owns its [`VoiceEngine`] directly and the caller pulls blocks
//! with [`OfflineContext::render`]. Useful for tests, benchmarks and anything
//! else that wants the real voice graph without an output device.

use std::collections::VecDeque;

use crate::{
    engine::{VoiceEngine, VoiceMessage},
    host::{AudioContext, AudioHost, AudioInitError, Readiness, VoiceHandle, VoiceSpec},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineHost {
    sample_rate: f32,
    start_suspended: bool,
    inits: usize,
}

impl OfflineHost {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            start_suspended: false,
            inits: 0,
        }
    }

    /// Create contexts in the suspended state, like an output that has not
    /// been allowed to start yet.
    pub fn suspended(mut self) -> Self {
        self.start_suspended = true;
        self
    }

    /// How many contexts this host has created.
    pub fn inits(&self) -> usize {
        self.inits
    }
}

pub struct OfflineContext {
    engine: VoiceEngine<VecDeque<VoiceMessage>>,
    next_voice: u64,
    suspended: bool,
}

impl AudioHost for OfflineHost {
    type Context = OfflineContext;

    fn init(&mut self) -> Result<OfflineContext, AudioInitError> {
        self.inits += 1;
        Ok(OfflineContext {
            engine: VoiceEngine::new(self.sample_rate, VecDeque::new()),
            next_voice: 0,
            suspended: self.start_suspended,
        })
    }
}

impl OfflineContext {
    /// Render the next block. A suspended context outputs silence and does
    /// not advance time.
    pub fn render(&mut self, out: &mut [f32]) {
        if self.suspended {
            out.fill(0.0);
            return;
        }
        self.engine.render_block(out);
    }

    /// Render `seconds` of output in blocks of `block_size` frames.
    pub fn render_seconds(&mut self, seconds: f32, block_size: usize) -> Vec<f32> {
        let frames = (seconds.max(0.0) * self.engine.sample_rate()).round() as usize;
        let mut out = vec![0.0; frames];
        for block in out.chunks_mut(block_size.max(1)) {
            self.render(block);
        }
        out
    }

    /// Suspend output, dropping every voice that is still ringing.
    pub fn suspend(&mut self) {
        if !self.suspended {
            self.engine.receiver_mut().push_back(VoiceMessage::StopAll);
            self.suspended = true;
        }
    }

    pub fn engine(&self) -> &VoiceEngine<VecDeque<VoiceMessage>> {
        &self.engine
    }
}

impl AudioContext for OfflineContext {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<Readiness, AudioInitError> {
        self.suspended = false;
        Ok(Readiness::Ready)
    }

    fn create_voice(&mut self, spec: &VoiceSpec) -> VoiceHandle {
        self.next_voice += 1;
        let voice = VoiceHandle::new(self.next_voice);
        self.engine
            .receiver_mut()
            .push_back(VoiceMessage::Start { voice, spec: *spec });
        voice
    }

    fn set_gain(&mut self, voice: VoiceHandle, target: f32, ramp_seconds: f32) {
        self.engine.receiver_mut().push_back(VoiceMessage::SetGain {
            voice,
            target,
            ramp_seconds,
        });
    }

    fn stop_voice(&mut self, voice: VoiceHandle, after_seconds: f32) {
        self.engine.receiver_mut().push_back(VoiceMessage::Stop {
            voice,
            after_seconds,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{filter::FilterType, oscillator::Waveform};

    #[test]
    fn suspended_context_renders_silence_until_resumed() {
        let mut host = OfflineHost::new(48_000.0).suspended();
        let mut ctx = host.init().unwrap();
        let voice = ctx.create_voice(&VoiceSpec {
            waveform: Waveform::Sawtooth,
            filter: FilterType::LowPass,
            cutoff_hz: 800.0,
            frequency: 220.0,
        });
        ctx.set_gain(voice, 0.3, 0.0);

        assert!(ctx.render_seconds(0.01, 256).iter().all(|&s| s == 0.0));
        assert_eq!(ctx.engine().frames(), 0);

        assert_eq!(ctx.resume().unwrap(), Readiness::Ready);
        let out = ctx.render_seconds(0.05, 256);
        assert!(out.iter().any(|&s| s.abs() > 0.01));
        assert_eq!(host.inits(), 1);
    }
}
