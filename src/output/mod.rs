mod css;
mod json;

pub use css::{export_stylesheet, write_css};
pub use json::{export_json, write_json};
