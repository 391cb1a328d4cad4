//! Terminal mouse events → pointer events

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use saavy_pad::{PointerEvent, Surface};

/// Translate a crossterm mouse event, given the pad's on-screen surface.
///
/// Returns `None` for events the pad ignores (other buttons, scrolling,
/// hovering off the pad, anything before the first draw).
pub fn pointer_event(mouse: MouseEvent, surface: Option<Surface>) -> Option<PointerEvent> {
    let surface = surface?;
    let (column, row) = (f32::from(mouse.column), f32::from(mouse.row));
    let inside = surface.contains(column, row);
    let position = surface.normalize(column, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => Some(PointerEvent::Down(position)),
        MouseEventKind::Drag(MouseButton::Left) if inside => Some(PointerEvent::Move(position)),
        // Dragging off the pad counts as leaving it
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Leave),
        MouseEventKind::Moved if inside => Some(PointerEvent::Move(position)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use saavy_pad::Position;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // Columns 10..=30, rows 5..=15
    fn surface() -> Option<Surface> {
        Some(Surface::new(10.0, 5.0, 20.0, 10.0))
    }

    #[test]
    fn left_press_inside_is_down() {
        let event = pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 5), surface());
        assert_eq!(event, Some(PointerEvent::Down(Position::new(50.0, 0.0))));
    }

    #[test]
    fn right_column_is_the_right_edge() {
        let event = pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 15), surface());
        assert_eq!(event, Some(PointerEvent::Down(Position::new(100.0, 100.0))));
    }

    #[test]
    fn press_outside_or_with_other_buttons_is_ignored() {
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2), surface()),
            None
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Right), 20, 10), surface()),
            None
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::ScrollUp, 20, 10), surface()),
            None
        );
    }

    #[test]
    fn drag_off_the_pad_leaves() {
        let event = pointer_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10), surface());
        assert_eq!(event, Some(PointerEvent::Leave));
    }

    #[test]
    fn hover_moves_only_inside() {
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Moved, 10, 10), surface()),
            Some(PointerEvent::Move(Position::new(0.0, 50.0)))
        );
        assert_eq!(pointer_event(mouse(MouseEventKind::Moved, 0, 0), surface()), None);
    }

    #[test]
    fn release_anywhere_is_up() {
        let event = pointer_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), surface());
        assert_eq!(event, Some(PointerEvent::Up));
    }

    #[test]
    fn nothing_before_first_draw() {
        let event = pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 10), None);
        assert_eq!(event, None);
    }
}
