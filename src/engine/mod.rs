//! Audio-thread side of the pad.
//!
//! The session never touches samples. It sends [`VoiceMessage`]s through a
//! lock-free queue and the [`VoiceEngine`] turns them into sound inside the
//! output callback: it owns every voice, including torn-down voices that are
//! still ringing out their release, and retires them on their scheduled stop
//! frame.
//!
//! Everything here is allocation-free after construction.

pub mod message;
pub mod voice;

pub use message::{MessageReceiver, VoiceMessage};
pub use voice::EngineVoice;

use crate::{host::VoiceHandle, MAX_BLOCK_SIZE};

/// Room for the active voice plus the release tails of quick retriggers.
pub const MAX_VOICES: usize = 16;

pub struct VoiceEngine<R> {
    rx: R,
    voices: Vec<EngineVoice>,
    sample_rate: f32,
    frame_counter: u64,
    temp_buffer: Vec<f32>,
}

impl<R: MessageReceiver> VoiceEngine<R> {
    pub fn new(sample_rate: f32, rx: R) -> Self {
        Self {
            rx,
            voices: Vec::with_capacity(MAX_VOICES),
            sample_rate,
            frame_counter: 0,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Render the next block of mono output.
    ///
    /// Blocks longer than `MAX_BLOCK_SIZE` are rendered in chunks.
    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process control messages
        while let Some(msg) = self.rx.pop() {
            self.apply(msg);
        }

        out.fill(0.0);
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_chunk(chunk);
        }
    }

    fn render_chunk(&mut self, out: &mut [f32]) {
        let frame = self.frame_counter;

        for voice in &mut self.voices {
            let tbuf = &mut self.temp_buffer[..out.len()];
            tbuf.fill(0.0);
            let rendered = voice.render(tbuf, self.sample_rate, frame);

            for (o, v) in out[..rendered].iter_mut().zip(&tbuf[..rendered]) {
                *o += v;
            }
        }

        self.frame_counter += out.len() as u64;
        let now = self.frame_counter;
        self.voices.retain(|voice| !voice.is_stopped_at(now));
    }

    fn apply(&mut self, msg: VoiceMessage) {
        match msg {
            VoiceMessage::Start { voice, spec } => {
                if self.voices.len() == MAX_VOICES {
                    self.steal_voice();
                }
                self.voices.push(EngineVoice::new(
                    voice,
                    &spec,
                    self.sample_rate,
                    self.frame_counter,
                ));
            }
            VoiceMessage::SetGain {
                voice,
                target,
                ramp_seconds,
            } => {
                if let Some(v) = self.find_voice(voice) {
                    v.set_gain(target, ramp_seconds);
                }
            }
            VoiceMessage::Stop {
                voice,
                after_seconds,
            } => {
                let stop_at =
                    self.frame_counter + (after_seconds.max(0.0) * self.sample_rate).round() as u64;
                if let Some(v) = self.find_voice(voice) {
                    v.schedule_stop(stop_at);
                }
            }
            VoiceMessage::StopAll => self.voices.clear(),
        }
    }

    /// Drop the voice closest to its stop, or the oldest if none is stopping.
    fn steal_voice(&mut self) {
        let victim = self
            .voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| (v.stop_at().unwrap_or(u64::MAX), v.started_at()))
            .map(|(idx, _)| idx);

        if let Some(idx) = victim {
            self.voices.swap_remove(idx);
        }
    }

    fn find_voice(&mut self, handle: VoiceHandle) -> Option<&mut EngineVoice> {
        self.voices.iter_mut().find(|v| v.handle() == handle)
    }

    /// Voices that still exist, including ones ringing out.
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// Voices with no stop scheduled yet.
    pub fn active_voice_count(&self) -> usize {
        self.voices.iter().filter(|v| v.stop_at().is_none()).count()
    }

    pub fn voice(&self, handle: VoiceHandle) -> Option<&EngineVoice> {
        self.voices.iter().find(|v| v.handle() == handle)
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frame_counter
    }

    /// Access the message source (offline rendering pushes into it directly).
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }
}
