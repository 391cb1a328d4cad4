pub mod catalog; // Fixed scale and timbre catalogs
pub mod dsp;
pub mod engine; // Audio-thread voice rendering
pub mod graph; // Composable audio graph nodes
pub mod host;
pub mod mapper; // Pointer position -> pitch and volume
pub mod session; // Voice lifecycle state machine

pub use catalog::{Scale, Timbre};
pub use mapper::{NoteInfo, Position, Surface};
pub use session::{PlaybackState, PointerEvent, Selection, Session, SessionConfig};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
