//! The pad's fixed catalogs: scales ("vibes") and timbre presets ("sounds").
//!
//! Both are closed enums, so a selection can never point outside the catalog.
//! Text names exist only at the edges (command line, logs).

pub mod scale;
pub mod timbre;

pub use scale::{note_name, Scale};
pub use timbre::{Timbre, TimbreSpec};

use thiserror::Error;

/// A name that is not in one of the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCatalogError {
    #[error("unknown scale '{0}' (expected one of: major, minor, blues, chromatic, pentatonic)")]
    Scale(String),

    #[error("unknown sound '{0}' (expected one of: warm-pad, lofi-dreams, ethereal-bells, synth-wave, ambient-choir)")]
    Timbre(String),
}

/// Step `current` by `delta` positions through `all`, wrapping at both ends.
pub(crate) fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: isize) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|&item| item == current).unwrap_or(0) as isize;
    all[(index + delta).rem_euclid(len) as usize]
}
