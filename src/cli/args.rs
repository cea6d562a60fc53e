use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SpriterError;

#[derive(Parser, Debug)]
#[command(name = "spriter")]
#[command(version, about = "CSS sprite generator", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a CSS stylesheet for the given regions
    Css(CommonArgs),
    /// Write the regions as JSON metadata
    Json(CommonArgs),
    /// Launch the GUI
    #[cfg(feature = "gui")]
    Gui(GuiArgs),
}

#[cfg(feature = "gui")]
#[derive(Args, Debug, Clone)]
pub struct GuiArgs {
    /// Sprite sheet to open
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Region to add, as NAME=X,Y,WxH (repeatable)
    #[arg(short = 's', long = "sprite", value_name = "NAME=X,Y,WxH")]
    pub sprites: Vec<SpriteSpec>,

    /// Load settings and regions from a .spriter config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file [default: stdout]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sprite sheet image (dimensions are read from it)
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Background reference written into the CSS [default: image file name]
    #[arg(long)]
    pub url: Option<String>,

    /// Sheet width in pixels (overrides the image)
    #[arg(long)]
    pub width: Option<u32>,

    /// Sheet height in pixels (overrides the image)
    #[arg(long)]
    pub height: Option<u32>,

    /// Prepend a comment banner to the CSS
    #[arg(long)]
    pub banner: bool,

    /// How background offsets are computed [default: remainder]
    #[arg(long, value_enum)]
    pub offset_mode: Option<OffsetMode>,

    /// What to do when a name is added twice [default: overwrite]
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicatePolicy>,

    /// Write the merged settings and regions to a .spriter config file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Background offset convention
#[derive(
    Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetMode {
    /// Sheet size minus the region's top-left corner
    #[default]
    Remainder,
    /// Negated top-left corner
    Negative,
}

/// Handling of a sprite name that is already registered
#[derive(
    Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Replace the stored region, keeping its position in the output
    #[default]
    Overwrite,
    /// Refuse the second region
    Reject,
}

/// A region given on the command line as `NAME=X,Y,WxH`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for SpriteSpec {
    type Err = SpriterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SpriterError::InvalidSpriteSpec(s.to_string());

        let (name, rect) = s.split_once('=').ok_or_else(invalid)?;
        let mut parts = rect.split(',');
        let (Some(x), Some(y), Some(size), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let (w, h) = size.split_once(['x', 'X']).ok_or_else(invalid)?;

        Ok(SpriteSpec {
            name: name.trim().to_string(),
            x: x.trim().parse().map_err(|_e| invalid())?,
            y: y.trim().parse().map_err(|_e| invalid())?,
            width: w.trim().parse().map_err(|_e| invalid())?,
            height: h.trim().parse().map_err(|_e| invalid())?,
        })
    }
}

impl std::fmt::Display for SpriteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={},{},{}x{}",
            self.name, self.x, self.y, self.width, self.height
        )
    }
}
