mod registry;
mod sprite;

pub use registry::SpriteRegistry;
pub use sprite::{Sprite, validate_name};
