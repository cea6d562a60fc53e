use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::load::LoadedConfig;
use super::save::make_relative;
use super::types::SpriterConfig;
use crate::cli::{CommonArgs, DuplicatePolicy, OffsetMode, SpriteSpec};

/// Merged configuration from CLI args and optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub sprites: Vec<SpriteSpec>,
    pub output: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub banner: bool,
    pub offset_mode: OffsetMode,
    pub on_duplicate: DuplicatePolicy,
    pub live_preview: bool,
    pub verbose: bool,
    pub save_config: Option<PathBuf>,
}

impl MergedConfig {
    /// Config file contents reproducing this run, with paths relative to
    /// the directory the config is saved in.
    pub fn to_config(&self, config_path: &Path) -> SpriterConfig {
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));

        SpriterConfig {
            image: self.image.as_deref().map(|p| make_relative(p, base)),
            url: self.url.clone(),
            width: self.width,
            height: self.height,
            output: self.output.as_deref().map(|p| make_relative(p, base)),
            banner: self.banner,
            offset_mode: self.offset_mode,
            on_duplicate: self.on_duplicate,
            live_preview: self.live_preview,
            sprites: self.sprites.clone(),
            ..SpriterConfig::default()
        }
    }
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
pub fn merge_config_with_args(args: &CommonArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Regions: CLI replaces the config list entirely
    let sprites = if !args.sprites.is_empty() {
        args.sprites.clone()
    } else if let Some(ref lc) = loaded_config {
        lc.config.sprites.clone()
    } else {
        Vec::new()
    };

    let image = args
        .image
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_image));

    let output = args
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output));

    let url = args
        .url
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.url.clone()));

    let width = args
        .width
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.width));

    let height = args
        .height
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.height));

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let banner = args.banner || loaded_config.as_ref().is_some_and(|lc| lc.config.banner);

    let offset_mode = args.offset_mode.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.offset_mode)
            .unwrap_or_default()
    });

    let on_duplicate = args.on_duplicate.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.on_duplicate)
            .unwrap_or_default()
    });

    // Live preview is config-only
    let live_preview = loaded_config
        .as_ref()
        .map(|lc| lc.config.live_preview)
        .unwrap_or(true);

    Ok(MergedConfig {
        sprites,
        output,
        image,
        url,
        width,
        height,
        banner,
        offset_mode,
        on_duplicate,
        live_preview,
        verbose: args.verbose,
        save_config: args.save_config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliArgs, Command};
    use crate::config::save_config;
    use clap::Parser;

    fn common_args(argv: &[&str]) -> CommonArgs {
        let cli = CliArgs::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Css(args) | Command::Json(args) => args,
            #[cfg(feature = "gui")]
            Command::Gui(_) => panic!("expected css or json"),
        }
    }

    /// Write `config` into a fresh directory and return the file path
    fn config_file(tag: &str, config: &SpriterConfig) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spriter-merge-{}-{}",
            std::process::id(),
            tag
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sheet.spriter");
        save_config(config, &path).unwrap();
        path
    }

    fn sample_config() -> SpriterConfig {
        SpriterConfig {
            image: Some("img/sheet.png".to_string()),
            output: Some("out/sprites.css".to_string()),
            url: Some("cdn/sheet.png".to_string()),
            width: Some(639),
            height: Some(314),
            banner: true,
            offset_mode: OffsetMode::Negative,
            on_duplicate: DuplicatePolicy::Reject,
            live_preview: false,
            sprites: vec!["icon=10,10,50x30".parse().unwrap()],
            ..SpriterConfig::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let merged = merge_config_with_args(&common_args(&["spriter", "css"])).unwrap();

        assert!(merged.sprites.is_empty());
        assert_eq!(merged.image, None);
        assert_eq!(merged.output, None);
        assert!(!merged.banner);
        assert_eq!(merged.offset_mode, OffsetMode::Remainder);
        assert_eq!(merged.on_duplicate, DuplicatePolicy::Overwrite);
        assert!(merged.live_preview);
    }

    #[test]
    fn test_config_values_fill_in() {
        let path = config_file("fill", &sample_config());
        let dir = path.parent().unwrap().to_path_buf();

        let merged =
            merge_config_with_args(&common_args(&["spriter", "css", "-c", path.to_str().unwrap()]))
                .unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(merged.sprites, sample_config().sprites);
        assert_eq!(merged.image, Some(dir.join("img/sheet.png")));
        assert_eq!(merged.output, Some(dir.join("out/sprites.css")));
        assert_eq!(merged.url.as_deref(), Some("cdn/sheet.png"));
        assert_eq!((merged.width, merged.height), (Some(639), Some(314)));
        assert!(merged.banner);
        assert_eq!(merged.offset_mode, OffsetMode::Negative);
        assert_eq!(merged.on_duplicate, DuplicatePolicy::Reject);
        assert!(!merged.live_preview);
    }

    #[test]
    fn test_cli_overrides_config() {
        let path = config_file("override", &sample_config());

        let merged = merge_config_with_args(&common_args(&[
            "spriter",
            "json",
            "-c",
            path.to_str().unwrap(),
            "--sprite",
            "a=0,0,4x4",
            "-s",
            "b=4,0,4x4",
            "--image",
            "/abs/other.png",
            "-o",
            "/abs/out.json",
            "--width",
            "100",
            "--offset-mode",
            "remainder",
            "--on-duplicate",
            "overwrite",
        ]))
        .unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        // CLI regions replace the config list rather than extending it
        let names: Vec<_> = merged.sprites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(merged.image, Some(PathBuf::from("/abs/other.png")));
        assert_eq!(merged.output, Some(PathBuf::from("/abs/out.json")));
        assert_eq!((merged.width, merged.height), (Some(100), Some(314)));
        assert_eq!(merged.offset_mode, OffsetMode::Remainder);
        assert_eq!(merged.on_duplicate, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_banner_flag_ors_with_config() {
        let path = config_file(
            "banner",
            &SpriterConfig {
                banner: false,
                ..SpriterConfig::default()
            },
        );
        let config = path.to_str().unwrap();

        let off = merge_config_with_args(&common_args(&["spriter", "css", "-c", config])).unwrap();
        let on = merge_config_with_args(&common_args(&["spriter", "css", "-c", config, "--banner"]))
            .unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert!(!off.banner);
        assert!(on.banner);

        // No CLI flag can turn a config banner off
        let path = config_file("banner-on", &sample_config());
        let merged =
            merge_config_with_args(&common_args(&["spriter", "css", "-c", path.to_str().unwrap()]))
                .unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
        assert!(merged.banner);
    }

    #[test]
    fn test_missing_config_file() {
        let err = merge_config_with_args(&common_args(&[
            "spriter",
            "css",
            "-c",
            "/nonexistent/sheet.spriter",
        ]))
        .unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load config"));
    }

    #[test]
    fn test_to_config_relative_to_save_path() {
        let merged = merge_config_with_args(&common_args(&[
            "spriter",
            "css",
            "--image",
            "/project/assets/sheet.png",
            "-o",
            "/project/dist/sprites.css",
            "-s",
            "icon=1,2,3x4",
        ]))
        .unwrap();

        let config = merged.to_config(Path::new("/project/sheet.spriter"));
        assert_eq!(config.image.as_deref(), Some("assets/sheet.png"));
        assert_eq!(config.output.as_deref(), Some("dist/sprites.css"));
        assert_eq!(config.sprites, merged.sprites);
        assert!(config.live_preview);
    }
}
