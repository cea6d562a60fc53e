use serde::{Deserialize, Serialize};

/// Pixel position relative to the drawing surface's top-left corner.
///
/// Signed so that pointer positions dragged past the surface edge stay
/// representable; such positions fail the selection validity check instead
/// of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate a page position into the coordinate space whose origin is `origin`
    /// Position relative to `origin`, clamped to the `i32` range.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

/// A rectangle drawn from `start` towards the bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Point,
    pub width: u32,
    pub height: u32,
}

impl Selection {
    /// Derive a selection from two corners.
    ///
    /// Returns `None` when `end` lies left of or above `start`; only drags
    /// towards the bottom-right produce a rectangle.
    pub fn from_corners(start: Point, end: Point) -> Option<Self> {
        let width = u32::try_from(end.x.checked_sub(start.x)?).ok()?;
        let height = u32::try_from(end.y.checked_sub(start.y)?).ok()?;
        Some(Self {
            start,
            width,
            height,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn end(&self) -> Point {
        Point::new(
            self.start.x.saturating_add_unsigned(self.width),
            self.start.y.saturating_add_unsigned(self.height),
        )
    }
}
