use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriterError {
    #[error("The name can not be empty")]
    EmptyName,

    #[error("Sprite name '{name}' contains '{ch}', which is not allowed in a class selector")]
    InvalidName { name: String, ch: char },

    #[error("Sprite name '{0}' can not start with a digit or a hyphen and a digit")]
    InvalidNameStart(String),

    #[error("A sprite named '{0}' already exists")]
    DuplicateName(String),

    #[error("No region selected; drag a rectangle towards the bottom-right first")]
    NoSelection,

    #[error("Selected region is empty ({width}x{height})")]
    EmptySelection { width: u32, height: u32 },

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Sheet dimensions unknown: pass --image or both --width and --height")]
    MissingDimensions,

    #[error("Invalid sprite '{0}', expected NAME=X,Y,WxH inside the sheet")]
    InvalidSpriteSpec(String),
}

impl SpriterError {
    /// Errors a user can fix by changing their input; the session stays usable.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SpriterError::EmptyName
                | SpriterError::InvalidName { .. }
                | SpriterError::InvalidNameStart(_)
                | SpriterError::DuplicateName(_)
                | SpriterError::NoSelection
                | SpriterError::EmptySelection { .. }
        )
    }
}
