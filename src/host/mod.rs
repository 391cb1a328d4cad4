//! The seam between the session and whatever actually makes sound.
//!
//! The session only ever talks to an [`AudioHost`] (to lazily create the one
//! output context) and to that [`AudioContext`] (to start, fade and stop
//! voices). Any backend satisfying these two traits is substitutable: the
//! binary uses the cpal-backed [`device::CpalHost`], tests and benchmarks use
//! [`offline::OfflineHost`] or recording fakes.

#[cfg(feature = "rtrb")]
pub mod device;
pub mod error;
pub mod offline;

pub use error::AudioInitError;

use crate::dsp::{filter::FilterType, oscillator::Waveform};

/// Opaque reference to a voice created by an [`AudioContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceHandle(u64);

impl VoiceHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Everything needed to build a voice, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSpec {
    pub waveform: Waveform,
    pub filter: FilterType,
    pub cutoff_hz: f32,
    pub frequency: f32,
}

/// Outcome of asking a suspended context to resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The context is running; voices can be created now.
    Ready,
    /// The resume is in flight. Poll [`AudioContext::is_suspended`] until it
    /// clears.
    Pending,
}

/// Creates the audio output context. Called lazily, at most once per
/// successful initialization.
pub trait AudioHost {
    type Context: AudioContext;

    fn init(&mut self) -> Result<Self::Context, AudioInitError>;
}

/// A live audio output that can play voices.
///
/// Gain changes use "set target" semantics: the gain approaches `target`
/// exponentially with time constant `ramp_seconds`.
pub trait AudioContext {
    /// Whether the host has paused output (autoplay or power policy).
    fn is_suspended(&self) -> bool;

    fn resume(&mut self) -> Result<Readiness, AudioInitError>;

    /// Start a voice at zero gain.
    fn create_voice(&mut self, spec: &VoiceSpec) -> VoiceHandle;

    fn set_gain(&mut self, voice: VoiceHandle, target: f32, ramp_seconds: f32);

    /// Stop the voice's oscillator `after_seconds` from now. Not cancellable.
    fn stop_voice(&mut self, voice: VoiceHandle, after_seconds: f32);
}
