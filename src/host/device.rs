//! cpal-backed audio host.
//!
//! `init()` opens the default output device and starts an output stream whose
//! callback owns a [`VoiceEngine`]. The session's voice operations become
//! [`VoiceMessage`]s pushed through an `rtrb` ring buffer, so nothing on the
//! control side ever blocks the audio thread.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    engine::{VoiceEngine, VoiceMessage},
    host::{AudioContext, AudioHost, AudioInitError, Readiness, VoiceHandle, VoiceSpec},
    MAX_BLOCK_SIZE,
};

/// Control queue depth. A retrigger costs four messages.
const MESSAGE_QUEUE_SIZE: usize = 1024;

/// Rendered samples kept for visualization.
const SCOPE_QUEUE_SIZE: usize = 8192;

#[derive(Debug, Default)]
pub struct CpalHost {
    _private: (),
}

impl CpalHost {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The running output stream plus the sending half of its control queue.
pub struct CpalContext {
    stream: cpal::Stream,
    tx: Producer<VoiceMessage>,
    scope_rx: Option<Consumer<f32>>,
    next_voice: u64,
    suspended: bool,
    sample_rate: f32,
    channels: usize,
}

impl AudioHost for CpalHost {
    type Context = CpalContext;

    fn init(&mut self) -> Result<CpalContext, AudioInitError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioInitError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, rx) = RingBuffer::<VoiceMessage>::new(MESSAGE_QUEUE_SIZE);
        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE_SIZE);

        let mut engine = VoiceEngine::new(sample_rate, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    engine.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                        // The scope is best effort; a full queue drops samples
                        let _ = scope_tx.push(s);
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;
        log::info!("audio output running: {sample_rate} Hz, {channels} channel(s)");

        Ok(CpalContext {
            stream,
            tx,
            scope_rx: Some(scope_rx),
            next_voice: 0,
            suspended: false,
            sample_rate,
            channels,
        })
    }
}

impl CpalContext {
    /// Pause output, as a host power policy would. The next pointer press
    /// resumes it.
    ///
    /// Whatever is still ringing is dropped first: a paused stream would
    /// otherwise freeze release tails and replay them on resume.
    pub fn suspend(&mut self) -> Result<(), AudioInitError> {
        if !self.suspended {
            self.send(VoiceMessage::StopAll);
            self.stream.pause()?;
            self.suspended = true;
            log::info!("audio output suspended");
        }
        Ok(())
    }

    /// Hand out the receiving end of the scope queue (once).
    pub fn take_scope(&mut self) -> Option<Consumer<f32>> {
        self.scope_rx.take()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    fn send(&mut self, msg: VoiceMessage) {
        if self.tx.push(msg).is_err() {
            log::warn!("voice message queue full, dropped {msg:?}");
        }
    }
}

impl AudioContext for CpalContext {
    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<Readiness, AudioInitError> {
        if self.suspended {
            self.stream.play()?;
            self.suspended = false;
            log::info!("audio output resumed");
        }
        Ok(Readiness::Ready)
    }

    fn create_voice(&mut self, spec: &VoiceSpec) -> VoiceHandle {
        self.next_voice += 1;
        let voice = VoiceHandle::new(self.next_voice);
        self.send(VoiceMessage::Start { voice, spec: *spec });
        voice
    }

    fn set_gain(&mut self, voice: VoiceHandle, target: f32, ramp_seconds: f32) {
        self.send(VoiceMessage::SetGain {
            voice,
            target,
            ramp_seconds,
        });
    }

    fn stop_voice(&mut self, voice: VoiceHandle, after_seconds: f32) {
        self.send(VoiceMessage::Stop {
            voice,
            after_seconds,
        });
    }
}
