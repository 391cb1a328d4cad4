//! TUI module for saavy-pad
//!
//! Draws the play surface, the status line and a scope of the audio output.

mod status;
mod surface;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use rtrb::Consumer;

use saavy_pad::{
    host::{device::CpalHost, AudioContext},
    session::{AudioStatus, CursorRenderer},
    Position, Selection, Session, Surface,
};

use status::{render_status, AudioStats, StatusInfo};
use surface::render_surface;
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

/// Everything the UI remembers between frames
pub struct PadView {
    /// Where the cursor was last placed by the session
    cursor: Position,
    /// The pad's on-screen rectangle, known after the first draw
    surface: Option<Surface>,
    /// Ring buffer receiver for rendered samples
    scope_rx: Option<Consumer<f32>>,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
}

impl PadView {
    pub fn new() -> Self {
        Self {
            cursor: Position::CENTER,
            surface: None,
            scope_rx: None,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
        }
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn has_scope(&self) -> bool {
        self.scope_rx.is_some()
    }

    pub fn attach_scope(&mut self, scope_rx: Consumer<f32>) {
        self.scope_rx = Some(scope_rx);
    }

    /// Drain new samples, keeping the last VIS_BUFFER_SIZE
    pub fn poll_scope(&mut self) {
        let Some(rx) = self.scope_rx.as_mut() else {
            return;
        };

        while let Ok(sample) = rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, session: &Session<CpalHost>, selection: &Selection) {
        let area = frame.area();

        // Main layout: status, pad, scope, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Pad
                Constraint::Length(7), // Scope
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let info = StatusInfo {
            selection: *selection,
            state: session.state(),
            audio: session.audio_status(),
            note: session.last_note(),
            sample_rate: session.context().map(|ctx| ctx.sample_rate()),
            suspended: session.context().is_some_and(|ctx| ctx.is_suspended()),
        };
        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, chunks[0], &info, &stats);

        self.surface = render_surface(frame, chunks[1], selection, self.cursor, session.state());

        render_waveform(frame, chunks[2], &self.audio_buffer);

        let mut help = String::from(" Drag on the pad to play  [←/→] Sound  [↑/↓] Vibe  [Q] Quit");
        if info.audio == AudioStatus::Unavailable {
            help.push_str("   (no audio output, see log)");
        }
        let help = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

impl CursorRenderer for PadView {
    fn reposition(&mut self, position: Position) {
        self.cursor = position;
    }
}
