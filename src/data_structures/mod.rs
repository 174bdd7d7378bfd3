//! Scene data: materials, lights, transforms, object descriptors and GPU textures.
//!
//! - `material` holds material properties and the catalog they are looked up in
//! - `light` holds the light sources pushed to the lighting shader
//! - `transform` builds per-draw model matrices
//! - `scene_object` describes what is drawn and how its surface is shaded
//! - `texture` contains the GPU texture wrapper and creation utilities

pub mod light;
pub mod material;
pub mod scene_object;
pub mod texture;
pub mod transform;
