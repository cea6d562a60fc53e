mod args;

#[cfg(feature = "gui")]
pub use args::GuiArgs;
pub use args::{CliArgs, Command, CommonArgs, DuplicatePolicy, OffsetMode, SpriteSpec};
