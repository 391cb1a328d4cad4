//! The pad's voice lifecycle.
//!
//! One [`Session`] owns everything mutable about playing the pad: the lazily
//! created audio context, the single active voice, and the playback flag.
//! Pointer events come in through [`Session::handle`], the current
//! [`Selection`] is passed alongside by reference, and the cursor is
//! repositioned through a [`CursorRenderer`].

/*
Voice Lifecycle
===============

    ┌──────┐  press, audible    ┌──────────┐
    │ Idle │ ─────────────────→ │ Sounding │ ──┐ move, audible
    └──────┘                    └──────────┘ ←─┘ (retrigger)
       ↑  ↑                        │     ↑
       │  │ release                │     │ move, audible
       │  │              move,     │     │
       │  │              silent    ↓     │
       │  │                     ┌───────┐│
       │  └──────────────────── │ Armed │┘
       │        release         └───────┘
       │                            ↑
       └──── press, silent ─────────┘  (also: press without audio)

  press    pointer down, or a single-finger touch start
  move     pointer move while down, or a single-finger touch move
  release  pointer up, pointer leaving the surface, or the last touch ending

Every transition out of Sounding tears the voice down first: the gain fades
toward zero and the oscillator stop is scheduled `stop_delay` later. A move
never modulates the existing voice; it always replaces it, so pitch changes
are discrete steps with no glide.

Deferred Actions
----------------

Resuming a suspended context may not complete immediately. While a resume is
pending, lifecycle actions queue up in arrival order (the cursor still moves
right away) and are replayed by `poll()` once the context is running. Short
queues are not coalesced: a quick tap during the resume replays as start, then
stop.

The queue holds at most [`MAX_DEFERRED`] actions. Once full, it collapses to
the newest action alone, which is all the replay needs to end in the right
state. A resume that fails outright drops the queue.
*/

mod config;
mod selection;

pub use config::SessionConfig;
pub use selection::Selection;

use std::collections::VecDeque;

use crate::{
    host::{AudioContext, AudioHost, Readiness, VoiceHandle},
    mapper::{map_position, NoteInfo, Position},
};

/// Where the lifecycle state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Pointer up, no voice.
    #[default]
    Idle,
    /// Pointer down, no voice: the position is below the audibility gate, or
    /// there is no audio output.
    Armed,
    /// Pointer down and a voice is playing.
    Sounding,
}

/// State of the audio output as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioStatus {
    /// Nothing has asked for audio yet.
    #[default]
    Uninitialized,
    Ready,
    /// A resume is in flight; lifecycle actions are being deferred.
    Pending,
    /// The host failed to create or resume the context. Retried on the next
    /// press.
    Unavailable,
}

/// Raw input, already normalized to surface percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Position),
    Move(Position),
    Up,
    Leave,
    TouchStart { position: Position, touches: usize },
    TouchMove { position: Position, touches: usize },
    TouchEnd { remaining: usize },
}

/// Receives the cursor position on every press and move.
pub trait CursorRenderer {
    fn reposition(&mut self, position: Position);
}

/// Records every position, oldest first.
impl CursorRenderer for Vec<Position> {
    fn reposition(&mut self, position: Position) {
        self.push(position);
    }
}

/// Deferred actions kept while a resume is pending.
pub const MAX_DEFERRED: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Start(Position),
    Retrigger(Position),
    Stop,
}

pub struct Session<H: AudioHost> {
    host: H,
    context: Option<H::Context>,
    config: SessionConfig,
    audio: AudioStatus,
    state: PlaybackState,
    pointer_down: bool,
    voice: Option<VoiceHandle>,
    deferred: VecDeque<Action>,
    last_note: Option<NoteInfo>,
}

impl<H: AudioHost> Session<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, SessionConfig::default())
    }

    pub fn with_config(host: H, config: SessionConfig) -> Self {
        Self {
            host,
            context: None,
            config,
            audio: AudioStatus::Uninitialized,
            state: PlaybackState::Idle,
            pointer_down: false,
            voice: None,
            deferred: VecDeque::new(),
            last_note: None,
        }
    }

    /// Create (or resume) the audio context ahead of the first press.
    ///
    /// Idempotent: an existing context is reused.
    pub fn warm_up(&mut self) -> AudioStatus {
        self.ensure_audio()
    }

    /// Feed one input event through the state machine.
    pub fn handle<C: CursorRenderer + ?Sized>(
        &mut self,
        event: PointerEvent,
        selection: &Selection,
        cursor: &mut C,
    ) {
        match event {
            PointerEvent::Down(position) => self.press(position, selection, cursor),
            PointerEvent::Move(position) => self.movement(position, selection, cursor),
            PointerEvent::Up | PointerEvent::Leave => self.release(selection),
            PointerEvent::TouchStart { position, touches } => {
                if touches == 1 {
                    self.press(position, selection, cursor);
                } else {
                    log::debug!("ignoring touch start with {touches} fingers");
                }
            }
            PointerEvent::TouchMove { position, touches } => {
                if touches == 1 {
                    self.movement(position, selection, cursor);
                } else {
                    cursor.reposition(position);
                }
            }
            PointerEvent::TouchEnd { remaining } => {
                if remaining == 0 {
                    self.release(selection);
                }
            }
        }
    }

    /// Replay deferred actions once a pending resume has completed.
    ///
    /// Call regularly from the event loop; cheap when nothing is deferred.
    pub fn poll(&mut self, selection: &Selection) {
        if self.deferred.is_empty() {
            return;
        }

        let running = self.context.as_ref().is_some_and(|ctx| !ctx.is_suspended());
        if !running {
            return;
        }

        self.audio = AudioStatus::Ready;
        log::debug!("audio resumed, replaying {} deferred action(s)", self.deferred.len());
        while let Some(action) = self.deferred.pop_front() {
            self.apply(action, selection);
        }
    }

    fn press<C: CursorRenderer + ?Sized>(
        &mut self,
        position: Position,
        selection: &Selection,
        cursor: &mut C,
    ) {
        self.pointer_down = true;
        cursor.reposition(position);

        match self.ensure_audio() {
            AudioStatus::Pending => self.defer(Action::Start(position)),
            _ => self.dispatch(Action::Start(position), selection),
        }
    }

    fn movement<C: CursorRenderer + ?Sized>(
        &mut self,
        position: Position,
        selection: &Selection,
        cursor: &mut C,
    ) {
        cursor.reposition(position);

        // Hovering only moves the cursor
        if !self.pointer_down || self.state == PlaybackState::Idle {
            return;
        }

        self.dispatch(Action::Retrigger(position), selection);
    }

    fn release(&mut self, selection: &Selection) {
        self.pointer_down = false;
        self.dispatch(Action::Stop, selection);
    }

    /// Apply now, unless earlier actions are still waiting on a resume.
    fn dispatch(&mut self, action: Action, selection: &Selection) {
        self.poll(selection);
        if self.deferred.is_empty() {
            self.apply(action, selection);
        } else {
            self.defer(action);
        }
    }

    fn defer(&mut self, action: Action) {
        self.teardown();
        // The playback flag follows the pointer even while sound is on hold
        self.state = match action {
            Action::Stop => PlaybackState::Idle,
            Action::Start(_) | Action::Retrigger(_) => PlaybackState::Armed,
        };
        if self.deferred.len() >= MAX_DEFERRED {
            log::warn!(
                "{} actions waiting on audio resume, keeping only the latest",
                self.deferred.len()
            );
            self.deferred.clear();
        }
        self.deferred.push_back(action);
    }

    fn apply(&mut self, action: Action, selection: &Selection) {
        match action {
            Action::Start(position) | Action::Retrigger(position) => {
                self.teardown();

                let note = map_position(position, selection.scale);
                self.last_note = Some(note);
                self.state = PlaybackState::Armed;

                if !note.is_audible() || self.audio != AudioStatus::Ready {
                    return;
                }
                let Some(ctx) = self.context.as_mut() else {
                    return;
                };

                let voice = ctx.create_voice(&note.voice_spec(selection.timbre));
                ctx.set_gain(voice, note.volume, self.config.attack_time_constant);
                self.voice = Some(voice);
                self.state = PlaybackState::Sounding;

                log::debug!(
                    "voice {} at {:.2} Hz, volume {:.3} ({})",
                    voice.id(),
                    note.frequency,
                    note.volume,
                    selection.timbre.name()
                );
            }
            Action::Stop => {
                self.teardown();
                self.state = PlaybackState::Idle;
            }
        }
    }

    /// Fade out and schedule the stop of the active voice, if any.
    fn teardown(&mut self) {
        let Some(voice) = self.voice.take() else {
            return;
        };
        if let Some(ctx) = self.context.as_mut() {
            ctx.set_gain(voice, 0.0, self.config.release_time_constant);
            ctx.stop_voice(voice, self.config.stop_delay);
        }
    }

    fn ensure_audio(&mut self) -> AudioStatus {
        if self.context.is_none() {
            match self.host.init() {
                Ok(ctx) => {
                    log::info!("audio context created");
                    self.context = Some(ctx);
                }
                Err(err) => {
                    log::warn!("audio unavailable, continuing without sound: {err}");
                    self.audio = AudioStatus::Unavailable;
                    return self.audio;
                }
            }
        }

        let Some(ctx) = self.context.as_mut() else {
            return self.audio;
        };

        self.audio = if !ctx.is_suspended() {
            AudioStatus::Ready
        } else {
            match ctx.resume() {
                Ok(Readiness::Ready) => AudioStatus::Ready,
                Ok(Readiness::Pending) => AudioStatus::Pending,
                Err(err) => {
                    log::warn!("could not resume audio, continuing without sound: {err}");
                    if !self.deferred.is_empty() {
                        log::debug!("dropping {} deferred action(s)", self.deferred.len());
                        self.deferred.clear();
                    }
                    AudioStatus::Unavailable
                }
            }
        };
        self.audio
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The playback session flag: true while the pointer holds the pad.
    pub fn is_playing(&self) -> bool {
        self.state != PlaybackState::Idle
    }

    pub fn audio_status(&self) -> AudioStatus {
        self.audio
    }

    /// The active voice, if one is sounding.
    pub fn voice(&self) -> Option<VoiceHandle> {
        self.voice
    }

    /// The most recent mapping, audible or not.
    pub fn last_note(&self) -> Option<NoteInfo> {
        self.last_note
    }

    /// Actions waiting for a pending resume.
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn context(&self) -> Option<&H::Context> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut H::Context> {
        self.context.as_mut()
    }
}
