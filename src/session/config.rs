#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Voice timing used by the session.
///
/// All values are in seconds. Ramps use "set target" semantics, so they are
/// exponential time constants rather than ramp durations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Fade-in of a new voice, from silence to its target volume.
    pub attack_time_constant: f32,
    /// Fade-out of a voice being torn down.
    pub release_time_constant: f32,
    /// Delay between starting the fade-out and stopping the oscillator.
    pub stop_delay: f32,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            attack_time_constant: 0.1,
            release_time_constant: 0.1,
            stop_delay: 0.2,
        }
    }

    pub fn attack(mut self, seconds: f32) -> Self {
        self.attack_time_constant = seconds.max(0.0);
        self
    }

    pub fn release(mut self, seconds: f32) -> Self {
        self.release_time_constant = seconds.max(0.0);
        self
    }

    pub fn stop_delay(mut self, seconds: f32) -> Self {
        self.stop_delay = seconds.max(0.0);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
