//! still-life
//!
//! Texture, material and lighting plumbing for a small, fixed 3D still life:
//! a fruit bowl built from a plane, spheres and a cylinder. The crate owns
//! the texture registry and the material catalog and turns a declarative
//! list of objects into uniform writes and draw calls. Shader compilation,
//! mesh generation and the window loop stay with the caller, behind the
//! [`ShaderUniforms`], [`ShapeMeshes`] and [`TextureBackend`] traits.
//!
//! High-level modules
//! - `config`: scene configuration, defaults to the fruit bowl
//! - `context`: headless GPU device and queue
//! - `data_structures`: materials, lights, transforms, object descriptors, GPU textures
//! - `error`: error kinds of loading and rendering
//! - `pipelines`: uniform identifiers, shader state pushes, WGPU backends
//! - `render`: the mesh-drawing seam
//! - `resources`: image decoding and the texture registry
//! - `scene`: the scene manager driving prepare and render
//!

pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;

pub use config::SceneConfig;
pub use error::SceneError;
pub use pipelines::{
    shader_state::ShaderState,
    uniforms::{ShaderUniforms, Uniform, UniformValue},
};
pub use render::{Shape, ShapeMeshes};
pub use resources::texture::{TextureBackend, TextureHandle, TextureRegistry};
pub use scene::SceneManager;

/// Install `env_logger` as the `log` backend.
///
/// Filtering follows `RUST_LOG`. Calling it again is harmless.
pub fn init_logger() {
    if let Err(e) = env_logger::try_init() {
        log::debug!("Logger already initialised: {e}");
    }
}
