use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::OffsetMode;
use crate::error::SpriterError;
use crate::tracker::Point;

const DEFAULT_URL: &str = "sprites.png";

/// The shared sprite sheet every sprite crops from.
///
/// The sheet is assumed to be drawn at its natural size with its top-left
/// corner on the surface origin. The preview offsets computed here are only
/// meaningful under that assumption; a scaled or shifted sheet needs the
/// scale and shift folded into [`BackgroundRef::preview_offset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRef {
    /// Reference written into `background-image: url('...')`
    pub url: String,
    /// Natural width of the sheet in pixels
    pub width: u32,
    /// Natural height of the sheet in pixels
    pub height: u32,
    /// How a selection's top-left is turned into a background offset
    #[serde(default)]
    pub offset_mode: OffsetMode,
}

impl BackgroundRef {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            offset_mode: OffsetMode::default(),
        }
    }

    pub fn with_offset_mode(mut self, mode: OffsetMode) -> Self {
        self.offset_mode = mode;
        self
    }

    /// Build a reference from an image on disk, reading only its header for
    /// the dimensions. `url` defaults to the file name.
    pub fn from_image(path: &Path, url: Option<&str>) -> Result<Self, SpriterError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| SpriterError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?;

        let url = url.map(str::to_string).unwrap_or_else(|| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned())
        });

        Ok(Self::new(url, width, height))
    }

    /// Combine whatever the user supplied into a reference.
    ///
    /// Explicit dimensions win over the image header; the image is only
    /// opened when a dimension is missing. Without an image or `url` the
    /// reference falls back to `sprites.png`.
    pub fn resolve(
        image: Option<&Path>,
        url: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<Self, SpriterError> {
        match (width, height, image) {
            (Some(w), Some(h), _) => {
                let url = match (url, image) {
                    (Some(u), _) => u.to_string(),
                    (None, Some(path)) => path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| DEFAULT_URL.to_string()),
                    (None, None) => DEFAULT_URL.to_string(),
                };
                Ok(Self::new(url, w, h))
            }
            (_, _, Some(path)) => {
                let mut bg = Self::from_image(path, url)?;
                bg.width = width.unwrap_or(bg.width);
                bg.height = height.unwrap_or(bg.height);
                Ok(bg)
            }
            _ => Err(SpriterError::MissingDimensions),
        }
    }

    /// Background offset that shows the crop starting at `start`, or `None`
    /// if it does not fit in an `i32`.
    pub fn preview_offset(&self, start: Point) -> Option<(i32, i32)> {
        match self.offset_mode {
            OffsetMode::Remainder => Some((
                saturating_i32(self.width).checked_sub(start.x)?,
                saturating_i32(self.height).checked_sub(start.y)?,
            )),
            OffsetMode::Negative => Some((start.x.checked_neg()?, start.y.checked_neg()?)),
        }
    }

    /// Whether a `width`x`height` region at `start` lies on the sheet.
    pub fn contains(&self, start: Point, width: u32, height: u32) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(start.x), u32::try_from(start.y)) else {
            return false;
        };

        x.checked_add(width).is_some_and(|right| right <= self.width)
            && y.checked_add(height).is_some_and(|bottom| bottom <= self.height)
    }
}

fn saturating_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
