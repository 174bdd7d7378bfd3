//! Shader-facing plumbing.
//!
//! - `uniforms` names every uniform and defines the uniform-setting seam
//! - `shader_state` pushes transforms, paints, materials and lights
//! - `scene_uniform` is the WGPU uniform buffer implementation
//! - `texture_slots` is the WGPU texture backend binding up to 16 slots

pub mod scene_uniform;
pub mod shader_state;
pub mod texture_slots;
pub mod uniforms;
