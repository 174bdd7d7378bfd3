//! Loading of external assets.
//!
//! - `texture` decodes image files and keeps the tag → slot registry

pub mod texture;
