pub mod background;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod output;
pub mod registry;
pub mod session;
pub mod tracker;

pub use background::BackgroundRef;
pub use cli::{CliArgs, Command, CommonArgs, DuplicatePolicy, OffsetMode, SpriteSpec};
pub use error::SpriterError;
pub use registry::{Sprite, SpriteRegistry};
pub use session::{HostEvent, InputRouter, Outcome, Session, SessionOptions, ToolState};
pub use tracker::{Point, PointerTarget, PointerTracker, Selection, Surface};
