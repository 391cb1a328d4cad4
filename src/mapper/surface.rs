use super::Position;

/// The interactive rectangle, in raw device coordinates (pixels, cells, ...).
///
/// `width` and `height` are the distance from the first to the last
/// addressable coordinate, so the far edge normalizes to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalize a raw coordinate to percent of the surface, clamping
    /// anything outside to the nearest edge.
    pub fn normalize(&self, raw_x: f32, raw_y: f32) -> Position {
        Position::new(
            percent(raw_x - self.left, self.width),
            percent(raw_y - self.top, self.height),
        )
    }

    /// Whether a raw coordinate lies on the surface (edges included).
    pub fn contains(&self, raw_x: f32, raw_y: f32) -> bool {
        (self.left..=self.left + self.width).contains(&raw_x)
            && (self.top..=self.top + self.height).contains(&raw_y)
    }

    /// Map a normalized position back to raw coordinates (for drawing).
    pub fn denormalize(&self, position: Position) -> (f32, f32) {
        (
            self.left + position.x / 100.0 * self.width,
            self.top + position.y / 100.0 * self.height,
        )
    }
}

/// A degenerate axis has nowhere to move, so everything sits at its origin.
fn percent(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        offset / extent * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_relative_to_origin() {
        let surface = Surface::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(surface.normalize(110.0, 70.0), Position::new(50.0, 50.0));
        assert_eq!(surface.normalize(210.0, 120.0), Position::new(100.0, 100.0));
    }

    #[test]
    fn out_of_bounds_clamps_to_edges() {
        let surface = Surface::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(surface.normalize(-50.0, 500.0), Position::new(0.0, 100.0));
        assert!(!surface.contains(-50.0, 500.0));
        assert!(surface.contains(210.0, 20.0));
    }

    #[test]
    fn degenerate_surface_does_not_divide_by_zero() {
        let surface = Surface::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(surface.normalize(3.0, 4.0), Position::new(0.0, 0.0));
    }

    #[test]
    fn denormalize_inverts_normalize() {
        let surface = Surface::new(2.0, 3.0, 78.0, 18.0);
        let (x, y) = surface.denormalize(surface.normalize(41.0, 12.0));
        assert!((x - 41.0).abs() < 1e-4 && (y - 12.0).abs() < 1e-4);
    }
}
