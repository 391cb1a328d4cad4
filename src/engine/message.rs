use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::host::{VoiceHandle, VoiceSpec};

/// Control messages sent from the session's thread to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VoiceMessage {
    Start {
        voice: VoiceHandle,
        spec: VoiceSpec,
    },
    SetGain {
        voice: VoiceHandle,
        target: f32,
        ramp_seconds: f32,
    },
    Stop {
        voice: VoiceHandle,
        after_seconds: f32,
    },
    /// Drop every voice at once, release tails included. Sent ahead of a
    /// suspend so nothing frozen mid-fade plays on after the resume.
    StopAll,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<VoiceMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<VoiceMessage> {
    fn pop(&mut self) -> Option<VoiceMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering and tests.
impl MessageReceiver for VecDeque<VoiceMessage> {
    fn pop(&mut self) -> Option<VoiceMessage> {
        self.pop_front()
    }
}
