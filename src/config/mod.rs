mod load;
mod merge;
mod save;
mod types;

pub use load::LoadedConfig;
pub use merge::{MergedConfig, merge_config_with_args};
pub use save::{make_relative, save_config};
pub use types::SpriterConfig;
