mod geometry;
mod surface;
mod tracker;

pub use geometry::{Point, Selection};
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use tracker::{PendingSelection, PointerTarget, PointerTracker};
