use std::path::Path;

use anyhow::{Context, Result};

use super::types::SpriterConfig;

/// Save a config to a JSON file with pretty formatting.
pub fn save_config(config: &SpriterConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Convert an absolute path to a path relative to the base directory.
///
/// If the path cannot be made relative (e.g., different drive on Windows),
/// returns the original path as a string.
pub fn make_relative(path: &Path, base: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(base) {
        relative.to_string_lossy().into_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SpriteSpec;
    use crate::config::LoadedConfig;
    use std::path::PathBuf;

    #[test]
    fn test_make_relative_nested() {
        let path = PathBuf::from("/project/assets/sprites.png");
        let base = PathBuf::from("/project");
        assert_eq!(make_relative(&path, &base), "assets/sprites.png");
    }

    #[test]
    fn test_make_relative_not_prefix() {
        let path = PathBuf::from("/other/sprites.png");
        let base = PathBuf::from("/project");
        assert_eq!(make_relative(&path, &base), "/other/sprites.png");
    }

    #[test]
    fn test_save_then_load() {
        let config = SpriterConfig {
            image: Some("sprites.png".to_string()),
            width: Some(639),
            height: Some(314),
            sprites: vec![SpriteSpec {
                name: "icon".to_string(),
                x: 10,
                y: 10,
                width: 50,
                height: 30,
            }],
            ..SpriterConfig::default()
        };

        let path = std::env::temp_dir().join(format!(
            "spriter-save-test-{}.spriter",
            std::process::id()
        ));
        save_config(&config, &path).unwrap();
        let loaded = LoadedConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.config, config);
        assert_eq!(loaded.config_dir, std::env::temp_dir());
    }
}
