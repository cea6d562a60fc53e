use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::background::BackgroundRef;
use crate::error::SpriterError;
use crate::registry::{Sprite, SpriteRegistry};

const BANNER: &str = "/*\n * Sprites generated with spriter\n */\n";

/// Render the stylesheet for every sprite in `registry`.
///
/// One combined rule assigns the shared background image, followed by one
/// block per sprite in insertion order. An empty registry renders as an
/// empty string. Calling this twice on the same registry yields identical
/// text.
pub fn export_stylesheet(
    registry: &SpriteRegistry,
    background: &BackgroundRef,
    banner: bool,
) -> String {
    if registry.is_empty() {
        return String::new();
    }

    let mut css = String::new();
    if banner {
        css.push_str(BANNER);
    }

    let selectors: Vec<String> = registry.iter().map(|s| format!(".{}", s.name)).collect();
    css.push_str(&format!(
        "{} {{\n    background-image: url('{}');\n}}\n",
        selectors.join(", "),
        background.url
    ));

    for sprite in registry {
        css.push_str(&sprite_rule(sprite));
    }

    css
}

fn sprite_rule(sprite: &Sprite) -> String {
    format!(
        ".{} {{\n    width: {}px;\n    height: {}px;\n    background-position: {}px {}px;\n}}\n",
        sprite.name, sprite.width, sprite.height, sprite.offset_x, sprite.offset_y
    )
}

/// Write the stylesheet to `path`
pub fn write_css(
    registry: &SpriteRegistry,
    background: &BackgroundRef,
    banner: bool,
    path: &Path,
) -> Result<()> {
    let content = export_stylesheet(registry, background, banner);

    fs::write(path, content).map_err(|e| SpriterError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_ab() -> SpriteRegistry {
        let mut registry = SpriteRegistry::default();
        for (name, w, h, x, y) in [("a", 30, 20, 5, 5), ("b", 10, 10, 1, 1)] {
            registry
                .insert(Sprite {
                    name: name.to_string(),
                    width: w,
                    height: h,
                    offset_x: x,
                    offset_y: y,
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_export_two_sprites() {
        let css = export_stylesheet(
            &registry_ab(),
            &BackgroundRef::new("sprites.png", 639, 314),
            false,
        );

        let expected = "\
.a, .b {
    background-image: url('sprites.png');
}
.a {
    width: 30px;
    height: 20px;
    background-position: 5px 5px;
}
.b {
    width: 10px;
    height: 10px;
    background-position: 1px 1px;
}
";
        assert_eq!(css, expected);
    }

    #[test]
    fn test_export_is_idempotent() {
        let registry = registry_ab();
        let bg = BackgroundRef::new("sheet.png", 100, 100);
        assert_eq!(
            export_stylesheet(&registry, &bg, true),
            export_stylesheet(&registry, &bg, true)
        );
    }

    #[test]
    fn test_banner_only_when_enabled() {
        let registry = registry_ab();
        let bg = BackgroundRef::new("sheet.png", 100, 100);

        assert!(export_stylesheet(&registry, &bg, true).starts_with("/*"));
        assert!(export_stylesheet(&registry, &bg, false).starts_with(".a, .b {"));
    }

    #[test]
    fn test_export_empty_registry() {
        let bg = BackgroundRef::new("sheet.png", 100, 100);
        assert_eq!(export_stylesheet(&SpriteRegistry::default(), &bg, true), "");
    }

    #[test]
    fn test_negative_offsets_render_with_sign() {
        let mut registry = SpriteRegistry::default();
        registry
            .insert(Sprite {
                name: "neg".to_string(),
                width: 4,
                height: 4,
                offset_x: -12,
                offset_y: 0,
            })
            .unwrap();

        let css = export_stylesheet(&registry, &BackgroundRef::new("s.png", 10, 10), false);
        assert!(css.contains("background-position: -12px 0px;"));
    }
}
