use serde::{Deserialize, Serialize};

use crate::error::SpriterError;

/// Characters that would break a `.name` class selector
const FORBIDDEN_NAME_CHARS: &[char] = &['.', ',', '{', '}', '#', ':', ';', '\'', '"'];

/// A named region of the sheet, ready to be exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Class name without the leading dot
    pub name: String,
    /// Width of the region in pixels
    pub width: u32,
    /// Height of the region in pixels
    pub height: u32,
    /// Horizontal `background-position` in pixels
    pub offset_x: i32,
    /// Vertical `background-position` in pixels
    pub offset_y: i32,
}

/// Check a user-supplied sprite name and return it trimmed.
pub fn validate_name(name: Option<&str>) -> Result<String, SpriterError> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(SpriterError::EmptyName);
    }

    if let Some(ch) = name
        .chars()
        .find(|c| c.is_whitespace() || FORBIDDEN_NAME_CHARS.contains(c))
    {
        return Err(SpriterError::InvalidName {
            name: name.to_string(),
            ch,
        });
    }

    let rest = name.strip_prefix('-').unwrap_or(name);
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(SpriterError::InvalidNameStart(name.to_string()));
    }

    Ok(name.to_string())
}
