use log::debug;

use super::{Point, Selection, Surface};
use crate::background::BackgroundRef;

/// Where a pointer press landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The drawing surface showing the sheet
    Surface,
    /// Anything else on the page (buttons, preview, margins)
    Elsewhere,
}

/// A rendered selection waiting to be named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub selection: Selection,
    /// Background offset shown in the preview for this selection
    pub offset: (i32, i32),
}

/// Turns pointer press/move/release into a selection rectangle.
///
/// Movement only records the latest corner. Geometry is derived and drawn in
/// [`PointerTracker::frame`], once per animation tick, and only when
/// something changed since the last tick.
#[derive(Debug)]
pub struct PointerTracker {
    tracking: bool,
    start: Point,
    end: Option<Point>,
    dirty: bool,
    live_preview: bool,
    pending: Option<PendingSelection>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PointerTracker {
    /// With `live_preview` off, the preview only refreshes when the drag ends.
    pub fn new(live_preview: bool) -> Self {
        Self {
            tracking: false,
            start: Point::default(),
            end: None,
            dirty: false,
            live_preview,
            pending: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    /// Start a new gesture at `point`. Presses outside the surface are ignored.
    ///
    /// Any previously pending selection is dropped, so a click that never
    /// moves cannot leave old dimensions behind for the next commit.
    pub fn begin_tracking(&mut self, point: Point, target: PointerTarget) {
        if target != PointerTarget::Surface {
            debug!("Ignoring press outside the drawing surface");
            return;
        }

        self.start = point;
        self.end = None;
        self.pending = None;
        self.tracking = true;
    }

    pub fn update_tracking(&mut self, point: Point) {
        if !self.tracking {
            return;
        }

        self.end = Some(point);
        if self.live_preview {
            self.dirty = true;
        }
    }

    /// Finish the gesture and schedule a final redraw.
    ///
    /// A release without a preceding press on the surface does nothing: no
    /// drag recorded an end corner, so a redraw would have nothing to draw.
    pub fn end_tracking(&mut self) {
        if !self.tracking {
            return;
        }

        self.tracking = false;
        self.dirty = true;
    }

    /// Per-tick entry point: redraw once if anything changed. Does not
    /// schedule another tick.
    pub fn frame(&mut self, surface: &mut dyn Surface, background: &BackgroundRef) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.recompute_and_render(surface, background);
    }

    /// Derive the selection from the recorded corners and draw it.
    ///
    /// Leaves everything untouched when the end corner is missing, lies left
    /// of or above the start, or the coordinates overflow.
    pub fn recompute_and_render(&mut self, surface: &mut dyn Surface, background: &BackgroundRef) {
        let Some(end) = self.end else {
            return;
        };

        let Some(selection) = Selection::from_corners(self.start, end) else {
            debug!(
                "Ignoring drag from ({}, {}) to ({}, {})",
                self.start.x, self.start.y, end.x, end.y
            );
            return;
        };

        let Some(offset) = background.preview_offset(selection.start) else {
            debug!(
                "Ignoring drag at ({}, {}): offset out of range",
                selection.start.x, selection.start.y
            );
            return;
        };

        surface.clear();
        surface.stroke_rect(&selection);
        surface.update_preview(selection.width, selection.height, offset);

        self.pending = Some(PendingSelection { selection, offset });

        // Each redraw needs a fresh move
        self.end = None;
    }

    /// Drop the pending selection and wipe the outline and preview.
    pub fn clear(&mut self, surface: &mut dyn Surface) {
        self.pending = None;
        surface.update_preview(0, 0, (0, 0));
        surface.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{DrawOp, RecordingSurface};

    fn background() -> BackgroundRef {
        BackgroundRef::new("sprites.png", 639, 314)
    }

    fn drag(tracker: &mut PointerTracker, from: Point, to: Point, surface: &mut RecordingSurface) {
        tracker.begin_tracking(from, PointerTarget::Surface);
        tracker.update_tracking(to);
        tracker.end_tracking();
        tracker.frame(surface, &background());
    }

    #[test]
    fn test_bottom_right_drag() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(&mut tracker, Point::new(10, 10), Point::new(60, 40), &mut surface);

        let pending = tracker.pending().unwrap();
        assert_eq!(pending.selection.width, 50);
        assert_eq!(pending.selection.height, 30);
        assert_eq!(pending.offset, (629, 304));
        assert_eq!(surface.outline(), Some(pending.selection));
        assert_eq!(surface.preview(), Some((50, 30, (629, 304))));
    }

    #[test]
    fn test_top_left_drag_produces_nothing() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(&mut tracker, Point::new(60, 40), Point::new(10, 10), &mut surface);

        assert!(tracker.pending().is_none());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_click_without_movement_drops_old_selection() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(&mut tracker, Point::new(0, 0), Point::new(20, 20), &mut surface);
        assert!(tracker.pending().is_some());

        tracker.begin_tracking(Point::new(5, 5), PointerTarget::Surface);
        tracker.end_tracking();
        tracker.frame(&mut surface, &background());

        assert!(tracker.pending().is_none());
    }

    #[test]
    fn test_press_outside_surface_is_ignored() {
        let mut tracker = PointerTracker::default();
        tracker.begin_tracking(Point::new(5, 5), PointerTarget::Elsewhere);
        assert!(!tracker.is_tracking());

        tracker.update_tracking(Point::new(50, 50));
        tracker.end_tracking();
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_live_preview_redraws_during_drag() {
        let mut tracker = PointerTracker::new(true);
        let mut surface = RecordingSurface::new();

        tracker.begin_tracking(Point::new(0, 0), PointerTarget::Surface);
        tracker.update_tracking(Point::new(10, 10));
        tracker.frame(&mut surface, &background());
        assert_eq!(tracker.pending().unwrap().selection.width, 10);

        tracker.update_tracking(Point::new(30, 12));
        tracker.frame(&mut surface, &background());
        assert_eq!(tracker.pending().unwrap().selection.width, 30);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_release_only_redraw_waits_for_end() {
        let mut tracker = PointerTracker::new(false);
        let mut surface = RecordingSurface::new();

        tracker.begin_tracking(Point::new(0, 0), PointerTarget::Surface);
        tracker.update_tracking(Point::new(10, 10));
        tracker.frame(&mut surface, &background());
        assert!(tracker.pending().is_none());

        tracker.end_tracking();
        tracker.frame(&mut surface, &background());
        assert_eq!(tracker.pending().unwrap().selection.width, 10);
    }

    #[test]
    fn test_frame_runs_once_per_change() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(&mut tracker, Point::new(0, 0), Point::new(4, 4), &mut surface);
        let drawn = surface.ops.len();

        tracker.frame(&mut surface, &background());
        assert_eq!(surface.ops.len(), drawn);
    }

    #[test]
    fn test_clear_resets_preview() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(&mut tracker, Point::new(1, 1), Point::new(9, 9), &mut surface);
        tracker.clear(&mut surface);

        assert!(tracker.pending().is_none());
        assert_eq!(surface.outline(), None);
        assert_eq!(surface.preview(), Some((0, 0, (0, 0))));
        assert_eq!(surface.ops.last(), Some(&DrawOp::Clear));
    }

    #[test]
    fn test_release_without_press_schedules_nothing() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        tracker.end_tracking();
        assert!(!tracker.is_dirty());

        tracker.frame(&mut surface, &background());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_overflowing_offset_is_ignored() {
        let mut tracker = PointerTracker::default();
        let mut surface = RecordingSurface::new();

        drag(
            &mut tracker,
            Point::new(i32::MIN, 0),
            Point::new(i32::MIN + 10, 10),
            &mut surface,
        );

        assert!(tracker.pending().is_none());
        assert!(surface.ops.is_empty());
    }
}
