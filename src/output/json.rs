use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::background::BackgroundRef;
use crate::error::SpriterError;
use crate::registry::{Sprite, SpriteRegistry};

#[derive(Serialize)]
struct JsonOutput<'a> {
    meta: Meta<'a>,
    sprites: Vec<JsonSprite<'a>>,
}

#[derive(Serialize)]
struct Meta<'a> {
    app: &'static str,
    version: &'static str,
    image: &'a str,
    size: Size,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSprite<'a> {
    name: &'a str,
    width: u32,
    height: u32,
    background_position: Position,
}

#[derive(Serialize)]
struct Position {
    x: i32,
    y: i32,
}

/// Serialize the registry and sheet metadata as pretty-printed JSON
pub fn export_json(registry: &SpriteRegistry, background: &BackgroundRef) -> Result<String> {
    let output = JsonOutput {
        meta: Meta {
            app: "spriter",
            version: env!("CARGO_PKG_VERSION"),
            image: &background.url,
            size: Size {
                w: background.width,
                h: background.height,
            },
        },
        sprites: registry.iter().map(sprite_to_json).collect(),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write JSON metadata file
pub fn write_json(registry: &SpriteRegistry, background: &BackgroundRef, path: &Path) -> Result<()> {
    let content = export_json(registry, background)?;

    fs::write(path, content).map_err(|e| SpriterError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn sprite_to_json(sprite: &Sprite) -> JsonSprite<'_> {
    JsonSprite {
        name: &sprite.name,
        width: sprite.width,
        height: sprite.height,
        background_position: Position {
            x: sprite.offset_x,
            y: sprite.offset_y,
        },
    }
}
