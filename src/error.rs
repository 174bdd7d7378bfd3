//! Error kinds surfaced by the texture registry and the scene composer.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while preparing or rendering the scene.
///
/// Tag lookup misses are not errors: they are logged and the `-1` sentinel
/// is pushed to the shader instead.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has {channels} channels, expected 3 or 4", .path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("texture registry is full ({capacity} slots), cannot register \"{tag}\"")]
    CapacityExceeded { tag: String, capacity: usize },

    #[error("texture backend rejected \"{tag}\": {source}")]
    Upload {
        tag: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("scene was already prepared")]
    AlreadyPrepared,

    #[error("scene must be prepared before it is rendered")]
    NotPrepared,
}
