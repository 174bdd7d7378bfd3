//! Per-draw shader state.
//!
//! [`ShaderState`] is implemented for every [`ShaderUniforms`] and turns the
//! scene's vocabulary (transforms, paints, materials, lights) into uniform
//! writes. It holds no state of its own.

use crate::{
    data_structures::{
        light::LightSource,
        material::{Material, MaterialCatalog},
        transform::Transform,
    },
    pipelines::uniforms::{
        LightField, MAX_LIGHTS, MaterialField, ShaderUniforms, Uniform, UniformValue,
    },
    resources::texture::{TextureBackend, TextureRegistry},
};

/// Slot pushed for a texture tag that is not registered.
pub const UNRESOLVED_SLOT: i32 = -1;

pub trait ShaderState: ShaderUniforms {
    fn set_transform(&mut self, transform: &Transform) {
        self.set(Uniform::Model, UniformValue::Mat4(transform.to_raw()));
    }

    fn set_solid_color(&mut self, rgba: [f32; 4]) {
        self.set(Uniform::UseTexture, UniformValue::Bool(false));
        self.set(Uniform::ObjectColor, UniformValue::Vec4(rgba));
    }

    /// Sample the texture registered under `tag`.
    ///
    /// An unknown tag still enables sampling and pushes [`UNRESOLVED_SLOT`].
    fn set_texture<B: TextureBackend>(&mut self, registry: &TextureRegistry<B>, tag: &str) {
        self.set(Uniform::UseTexture, UniformValue::Bool(true));
        let slot = match registry.find_slot(tag) {
            Some(slot) => slot as i32,
            None => {
                log::warn!(
                    "No texture registered under \"{tag}\", sampling slot {UNRESOLVED_SLOT}"
                );
                UNRESOLVED_SLOT
            }
        };
        self.set(Uniform::ObjectTexture, UniformValue::Sampler(slot));
    }

    fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.set(Uniform::UvScale, UniformValue::Vec2([u, v]));
    }

    /// Push the material tagged `tag`.
    ///
    /// Follows [`MaterialCatalog::find`]: with a non-empty catalog the five
    /// fields are pushed even when nothing matched, in which case they are
    /// the values of [`Material::default`]. An empty catalog pushes nothing.
    fn set_material(&mut self, catalog: &MaterialCatalog, tag: &str) {
        if catalog.is_empty() {
            return;
        }
        let mut material = Material::default();
        if catalog.find(tag, &mut material) {
            if catalog.get(tag).is_none() {
                log::warn!("No material defined as \"{tag}\", pushing the default one");
            }
            self.push_material(&material);
        }
    }

    fn push_material(&mut self, material: &Material) {
        use MaterialField::*;
        let m = |field| Uniform::Material(field);
        self.set(
            m(AmbientColor),
            UniformValue::Vec3(material.ambient_color.into()),
        );
        self.set(
            m(AmbientStrength),
            UniformValue::Float(material.ambient_strength),
        );
        self.set(
            m(DiffuseColor),
            UniformValue::Vec3(material.diffuse_color.into()),
        );
        self.set(
            m(SpecularColor),
            UniformValue::Vec3(material.specular_color.into()),
        );
        self.set(m(Shininess), UniformValue::Float(material.shininess));
    }

    /// Enable lighting and push every light in order.
    ///
    /// Lights beyond what the shader declares are dropped with a warning.
    fn setup_lights(&mut self, lights: &[LightSource]) {
        self.set(Uniform::UseLighting, UniformValue::Bool(true));
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "{} lights configured but the shader only has {MAX_LIGHTS}, ignoring the rest",
                lights.len()
            );
        }
        for (i, light) in lights.iter().take(MAX_LIGHTS).enumerate() {
            let l = |field| Uniform::Light(i, field);
            self.set(
                l(LightField::Position),
                UniformValue::Vec3(light.position.into()),
            );
            self.set(
                l(LightField::AmbientColor),
                UniformValue::Vec3(light.ambient_color.into()),
            );
            self.set(
                l(LightField::DiffuseColor),
                UniformValue::Vec3(light.diffuse_color.into()),
            );
            self.set(
                l(LightField::SpecularColor),
                UniformValue::Vec3(light.specular_color.into()),
            );
            self.set(
                l(LightField::FocalStrength),
                UniformValue::Float(light.focal_strength),
            );
            self.set(
                l(LightField::SpecularIntensity),
                UniformValue::Float(light.specular_intensity),
            );
        }
    }

    fn set_view_position(&mut self, position: [f32; 3]) {
        self.set(Uniform::ViewPosition, UniformValue::Vec3(position));
    }
}

impl<T: ShaderUniforms + ?Sized> ShaderState for T {}
