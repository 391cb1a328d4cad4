//! Error types for the audio host.

use thiserror::Error;

/// The host could not create or resume the audio output context.
///
/// Never fatal: the session carries on silently (the cursor still moves) and
/// tries again on the next pointer press.
#[derive(Debug, Error)]
pub enum AudioInitError {
    /// No output device to play through.
    #[error("no default output device available")]
    NoOutputDevice,

    /// The device would not report an output configuration.
    #[error("failed to fetch default output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    /// The output stream could not be opened.
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    /// The output stream refused to start (or restart after suspension).
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    /// The output stream refused to pause.
    #[error("failed to suspend output stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),

    /// Any other host that declined to produce audio.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}

impl AudioInitError {
    /// Creates an error for hosts without a more specific variant.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
