/*
Scale Catalog
=============

Every scale spans one octave, C4 up to (at most) C5, in equal temperament
rounded to 0.01 Hz. The pad lays a scale's notes out left to right across the
surface, so scales with fewer notes get wider columns:

    pentatonic  6 notes   |  C  |  D  |  E  |  G  |  A  |  C' |
    blues       7 notes
    major       8 notes
    minor       8 notes
    chromatic  12 notes   |C|C#|D|D#|E|F|F#|G|G#|A|A#|B|

Note the chromatic scale stops at B4 while the others reach C5.
*/

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{cycle, ParseCatalogError};

pub const C4: f32 = 261.63;
pub const CS4: f32 = 277.18;
pub const D4: f32 = 293.66;
pub const DS4: f32 = 311.13;
pub const E4: f32 = 329.63;
pub const F4: f32 = 349.23;
pub const FS4: f32 = 369.99;
pub const G4: f32 = 392.00;
pub const GS4: f32 = 415.30;
pub const A4: f32 = 440.00;
pub const AS4: f32 = 466.16;
pub const B4: f32 = 493.88;
pub const C5: f32 = 523.25;

const MAJOR: [f32; 8] = [C4, D4, E4, F4, G4, A4, B4, C5];
const MINOR: [f32; 8] = [C4, D4, DS4, F4, G4, GS4, AS4, C5];
const BLUES: [f32; 7] = [C4, DS4, F4, FS4, G4, AS4, C5];
const CHROMATIC: [f32; 12] = [C4, CS4, D4, DS4, E4, F4, FS4, G4, GS4, A4, AS4, B4];
const PENTATONIC: [f32; 6] = [C4, D4, E4, G4, A4, C5];

const NOTE_NAMES: [(f32, &str); 13] = [
    (C4, "C4"),
    (CS4, "C#4"),
    (D4, "D4"),
    (DS4, "D#4"),
    (E4, "E4"),
    (F4, "F4"),
    (FS4, "F#4"),
    (G4, "G4"),
    (GS4, "G#4"),
    (A4, "A4"),
    (AS4, "A#4"),
    (B4, "B4"),
    (C5, "C5"),
];

/// Name of a catalog pitch, e.g. `392.0` -> `"G4"`.
///
/// Only the thirteen pitches the scales are built from have names.
pub fn note_name(frequency: f32) -> Option<&'static str> {
    NOTE_NAMES
        .iter()
        .find(|(hz, _)| (hz - frequency).abs() < 0.005)
        .map(|&(_, name)| name)
}

/// Whether a catalog pitch is a black key (sharp).
pub fn is_sharp(frequency: f32) -> bool {
    note_name(frequency).is_some_and(|name| name.contains('#'))
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scale {
    #[default]
    Major,
    Minor,
    Blues,
    Chromatic,
    Pentatonic,
}

impl Scale {
    /// Catalog order, which is also the cycling order.
    pub const ALL: [Scale; 5] = [
        Scale::Major,
        Scale::Minor,
        Scale::Blues,
        Scale::Chromatic,
        Scale::Pentatonic,
    ];

    /// Frequencies in Hz, lowest first.
    pub fn frequencies(self) -> &'static [f32] {
        match self {
            Scale::Major => &MAJOR,
            Scale::Minor => &MINOR,
            Scale::Blues => &BLUES,
            Scale::Chromatic => &CHROMATIC,
            Scale::Pentatonic => &PENTATONIC,
        }
    }

    pub fn len(self) -> usize {
        self.frequencies().len()
    }

    /// Catalog key, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Blues => "blues",
            Scale::Chromatic => "chromatic",
            Scale::Pentatonic => "pentatonic",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Scale::Major => "Major",
            Scale::Minor => "Minor",
            Scale::Blues => "Blues",
            Scale::Chromatic => "Chromatic",
            Scale::Pentatonic => "Pentatonic",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scale {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCatalogError::Scale(s.to_string()))
    }
}
