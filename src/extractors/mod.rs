//! Request extractors.

pub mod json_body;
pub use json_body::{has_json_content_type, JsonBody};
