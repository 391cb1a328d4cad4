//! Pointer position → pitch and volume.

/*
Position-to-Sound Mapping
=========================

The play surface is a square of percentages. Horizontal position picks the
note, vertical position picks the volume:

      x = 0                                     x = 100
  y=0  ┌───────┬───────┬───────┬───────┬───────┬───────┐  loudest (0.3)
       │       │       │       │       │       │       │
       │  C4   │  D4   │  E4   │  G4   │  A4   │  C5   │  (pentatonic)
       │       │       │       │       │       │       │
 y=83  ├ ─ ─ ─ ┴ ─ ─ ─ ┴ ─ ─ ─ ┴ ─ ─ ─ ┴ ─ ─ ─ ┴ ─ ─ ─ ┤  audibility gate
 y=100 └───────────────────────────────────────────────┘  silent (0.0)

  noteIndex = floor(x / 100 * N)        N = notes in the scale
  volume    = (1 - y / 100) * 0.3

Right Edge
----------

At exactly x = 100 the formula yields noteIndex = N, one past the end. That
position deliberately plays the FIRST note of the scale rather than the last:
the right edge wraps to the tonic. It is a bounds check on the index, not a
clamp, so x = 99.99 still plays the top note.

Audibility Gate
---------------

Volumes at or below 0.05 (y ≥ 83.33) never start a voice. The bottom sixth of
the surface is a "mute strip": the cursor still follows the pointer but any
sounding voice is torn down.
*/

mod surface;

pub use surface::Surface;

use crate::{
    catalog::{note_name, Scale, Timbre},
    host::VoiceSpec,
};

/// Loudest volume, at the top edge.
pub const MAX_VOLUME: f32 = 0.3;

/// A voice is only created for volumes strictly above this.
pub const AUDIBILITY_THRESHOLD: f32 = 0.05;

/// Normalized pointer position, both axes in percent of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Where the cursor sits before the first interaction.
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    /// Build a position, clamping both axes to [0, 100].
    ///
    /// NaN coordinates land on 0.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// The index of the note under `x` in a scale of `len` notes.
///
/// `x = 100` maps to `len`, which is out of range and falls back to 0.
pub fn note_index(x: f32, len: usize) -> usize {
    let index = ((x / 100.0) * len as f32).floor() as usize;
    if index < len {
        index
    } else {
        0
    }
}

/// Volume for a vertical position: 0.3 at the top, 0.0 at the bottom.
#[inline]
pub fn volume_at(y: f32) -> f32 {
    (1.0 - y / 100.0) * MAX_VOLUME
}

/// Whether a volume is loud enough to start a voice.
#[inline]
pub fn is_audible(volume: f32) -> bool {
    volume > AUDIBILITY_THRESHOLD
}

/// The sound a position asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteInfo {
    pub note_index: usize,
    pub frequency: f32,
    pub volume: f32,
}

impl NoteInfo {
    pub fn is_audible(&self) -> bool {
        is_audible(self.volume)
    }

    /// "G4", or `None` for pitches outside the catalog.
    pub fn note_name(&self) -> Option<&'static str> {
        note_name(self.frequency)
    }

    /// The voice this note would be played with under `timbre`.
    pub fn voice_spec(&self, timbre: Timbre) -> VoiceSpec {
        let spec = timbre.spec();
        VoiceSpec {
            waveform: spec.waveform,
            filter: spec.filter,
            cutoff_hz: spec.cutoff_hz,
            frequency: self.frequency,
        }
    }
}

/// Map a position on the surface to a note of `scale`.
pub fn map_position(position: Position, scale: Scale) -> NoteInfo {
    let freqs = scale.frequencies();
    let note_index = note_index(position.x, freqs.len());

    NoteInfo {
        note_index,
        frequency: freqs[note_index],
        volume: volume_at(position.y),
    }
}
