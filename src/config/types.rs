use serde::{Deserialize, Serialize};

use crate::cli::{DuplicatePolicy, OffsetMode, SpriteSpec};

/// Spriter configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriterConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet image path
    pub image: Option<String>,
    /// Background reference written into the CSS (defaults to the image file name)
    pub url: Option<String>,
    /// Sheet width in pixels (read from the image when absent)
    pub width: Option<u32>,
    /// Sheet height in pixels (read from the image when absent)
    pub height: Option<u32>,
    /// Output file (stdout when absent)
    pub output: Option<String>,
    /// Prepend a comment banner to the CSS
    pub banner: bool,
    /// Background offset convention
    pub offset_mode: OffsetMode,
    /// What committing an existing name does
    pub on_duplicate: DuplicatePolicy,
    /// Redraw the selection while dragging, not only on release
    pub live_preview: bool,
    /// Regions to add, in order
    pub sprites: Vec<SpriteSpec>,
}

impl Default for SpriterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            image: None,
            url: None,
            width: None,
            height: None,
            output: None,
            banner: false,
            offset_mode: OffsetMode::default(),
            on_duplicate: DuplicatePolicy::default(),
            live_preview: true,
            sprites: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SpriterConfig =
            serde_json::from_str(r#"{ "image": "sprites.png", "on_duplicate": "reject" }"#)
                .unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.image.as_deref(), Some("sprites.png"));
        assert_eq!(config.on_duplicate, DuplicatePolicy::Reject);
        assert_eq!(config.offset_mode, OffsetMode::Remainder);
        assert!(config.live_preview);
        assert!(config.sprites.is_empty());
    }

    #[test]
    fn test_sprites_in_config() {
        let config: SpriterConfig = serde_json::from_str(
            r#"{ "sprites": [{ "name": "icon", "x": 10, "y": 10, "width": 50, "height": 30 }] }"#,
        )
        .unwrap();

        assert_eq!(config.sprites.len(), 1);
        assert_eq!(config.sprites[0].name, "icon");
        assert_eq!(config.sprites[0].width, 50);
    }
}
