use super::Selection;

/// Host-side drawing surface plus preview region.
///
/// The tracker never paints pixels itself; it tells the host what to show.
pub trait Surface {
    /// Remove any selection outline.
    fn clear(&mut self);

    /// Draw the outline of `selection`.
    fn stroke_rect(&mut self, selection: &Selection);

    /// Resize the preview region and shift its background to `offset`.
    fn update_preview(&mut self, width: u32, height: u32, offset: (i32, i32));
}

/// One call made on a [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Stroke(Selection),
    Preview {
        width: u32,
        height: u32,
        offset: (i32, i32),
    },
}

/// Surface that only records what it was asked to draw.
///
/// Used by the headless CLI and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent outline, unless cleared since
    pub fn outline(&self) -> Option<Selection> {
        match self.ops.iter().rev().find(|op| !matches!(op, DrawOp::Preview { .. })) {
            Some(DrawOp::Stroke(sel)) => Some(*sel),
            _ => None,
        }
    }

    /// Most recent preview size and offset
    pub fn preview(&self) -> Option<(u32, u32, (i32, i32))> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Preview {
                width,
                height,
                offset,
            } => Some((*width, *height, *offset)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_rect(&mut self, selection: &Selection) {
        self.ops.push(DrawOp::Stroke(*selection));
    }

    fn update_preview(&mut self, width: u32, height: u32, offset: (i32, i32)) {
        self.ops.push(DrawOp::Preview {
            width,
            height,
            offset,
        });
    }
}
