//! Status bar widget - shows selection, voice state, current note and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_pad::{session::AudioStatus, NoteInfo, PlaybackState, Selection};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// What the status bar shows, captured once per frame
pub struct StatusInfo {
    pub selection: Selection,
    pub state: PlaybackState,
    pub audio: AudioStatus,
    pub note: Option<NoteInfo>,
    pub sample_rate: Option<f32>,
    pub suspended: bool,
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, info: &StatusInfo, audio_stats: &AudioStats) {
    let block = Block::default().title(" saavy-pad ").borders(Borders::ALL);

    let (symbol, label, color) = match info.state {
        PlaybackState::Sounding => ("▶", "Sounding", Color::Green),
        PlaybackState::Armed => ("◌", "Armed", Color::Yellow),
        PlaybackState::Idle => ("■", "Idle", Color::DarkGray),
    };

    let note = match info.note {
        Some(note) if info.state != PlaybackState::Idle => format!(
            "{} {:.2}Hz  vol {:.2}  ",
            note.note_name().unwrap_or("N/A"),
            note.frequency,
            note.volume
        ),
        _ => String::from("--  "),
    };

    let output = match (info.audio, info.sample_rate) {
        (AudioStatus::Unavailable, _) => String::from("no audio  "),
        (AudioStatus::Pending, _) => String::from("resuming…  "),
        (_, Some(_)) if info.suspended => String::from("suspended  "),
        // Format sample rate nicely (e.g., 48000 -> "48.0kHz")
        (_, Some(sample_rate)) => format!("{:.1}kHz  ", sample_rate / 1000.0),
        (_, None) => String::from("starting…  "),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Vibe: {}  ", info.selection.scale.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Sound: {}  ", info.selection.timbre.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{symbol} {label}  "), Style::default().fg(color)),
        Span::styled(note, Style::default().fg(Color::White)),
        Span::styled(output, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
