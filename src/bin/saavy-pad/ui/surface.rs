//! Play surface widget - note columns, the audibility gate and the cursor

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use saavy_pad::{
    catalog::{note_name, scale::is_sharp},
    mapper::{is_audible, note_index, volume_at},
    PlaybackState, Position, Selection, Surface,
};

/// Render the pad and return its inner rectangle as a [`Surface`].
///
/// The surface spans from the first to the last inner cell, so the
/// rightmost column is x = 100 (which plays the tonic).
pub fn render_surface(
    frame: &mut Frame,
    area: Rect,
    selection: &Selection,
    cursor: Position,
    state: PlaybackState,
) -> Option<Surface> {
    let block = Block::default()
        .title(format!(
            " {} / {} ",
            selection.scale.label(),
            selection.timbre.label()
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let surface = Surface::new(
        f32::from(inner.x),
        f32::from(inner.y),
        f32::from(inner.width - 1),
        f32::from(inner.height - 1),
    );
    let frequencies = selection.scale.frequencies();
    let buf = frame.buffer_mut();

    // Note columns: alternate shading, sharps dimmed, name at the top
    let mut previous_index = None;
    for column in inner.left()..inner.right() {
        let x = surface.normalize(f32::from(column), surface.top).x;
        let index = note_index(x, frequencies.len());
        let frequency = frequencies[index];

        let shade = match (index % 2, is_sharp(frequency)) {
            (_, true) => Color::Rgb(20, 20, 28),
            (0, false) => Color::Rgb(36, 36, 52),
            _ => Color::Rgb(28, 28, 40),
        };

        for row in inner.top()..inner.bottom() {
            let y = surface.normalize(surface.left, f32::from(row)).y;
            if let Some(cell) = buf.cell_mut((column, row)) {
                cell.set_symbol(" ").set_bg(shade);
                if !is_audible(volume_at(y)) {
                    // Mute strip
                    cell.set_symbol("·").set_fg(Color::DarkGray);
                }
            }
        }

        // Label each column where its note begins (the wrapped right edge
        // doesn't get one)
        if previous_index.map_or(true, |prev| prev < index) {
            let style = if is_sharp(frequency) {
                Style::default().fg(Color::DarkGray).bg(shade)
            } else {
                Style::default().fg(Color::White).bg(shade)
            };
            let room = usize::from(inner.right() - column);
            buf.set_stringn(column, inner.top(), note_name(frequency).unwrap_or("?"), room, style);
        }
        previous_index = Some(index);
    }

    // Cursor
    let (x, y) = surface.denormalize(cursor);
    let color = match state {
        PlaybackState::Sounding => Color::LightGreen,
        PlaybackState::Armed => Color::Yellow,
        PlaybackState::Idle => Color::Gray,
    };
    if let Some(cell) = buf.cell_mut((x.round() as u16, y.round() as u16)) {
        cell.set_symbol("●")
            .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    }

    Some(surface)
}
