#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{Scale, Timbre};

/// What the player has chosen with the UI controls.
///
/// The session only reads it; the UI cycles it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub scale: Scale,
    pub timbre: Timbre,
}

impl Selection {
    pub fn new(scale: Scale, timbre: Timbre) -> Self {
        Self { scale, timbre }
    }

    pub fn next_scale(&mut self) {
        self.scale = self.scale.next();
    }

    pub fn previous_scale(&mut self) {
        self.scale = self.scale.previous();
    }

    pub fn next_timbre(&mut self) {
        self.timbre = self.timbre.next();
    }

    pub fn previous_timbre(&mut self) {
        self.timbre = self.timbre.previous();
    }
}
