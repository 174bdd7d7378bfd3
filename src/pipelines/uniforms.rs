//! Uniform identifiers and the uniform-setting seam.
//!
//! Every uniform the scene writes is a variant of [`Uniform`]. The shader
//! side names live in [`Uniform::name`] and nowhere else.

use std::{borrow::Cow, fmt};

/// Number of `lightSources[i]` entries the lighting shader declares.
pub const MAX_LIGHTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialField {
    AmbientColor,
    AmbientStrength,
    DiffuseColor,
    SpecularColor,
    Shininess,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightField {
    Position,
    AmbientColor,
    DiffuseColor,
    SpecularColor,
    FocalStrength,
    SpecularIntensity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    Model,
    ObjectColor,
    ObjectTexture,
    UseTexture,
    UseLighting,
    ViewPosition,
    UvScale,
    Material(MaterialField),
    Light(usize, LightField),
}

impl MaterialField {
    fn name(self) -> &'static str {
        match self {
            MaterialField::AmbientColor => "ambientColor",
            MaterialField::AmbientStrength => "ambientStrength",
            MaterialField::DiffuseColor => "diffuseColor",
            MaterialField::SpecularColor => "specularColor",
            MaterialField::Shininess => "shininess",
        }
    }
}

impl LightField {
    fn name(self) -> &'static str {
        match self {
            LightField::Position => "position",
            LightField::AmbientColor => "ambientColor",
            LightField::DiffuseColor => "diffuseColor",
            LightField::SpecularColor => "specularColor",
            LightField::FocalStrength => "focalStrength",
            LightField::SpecularIntensity => "specularIntensity",
        }
    }
}

impl Uniform {
    /// The name the shader program declares this uniform under.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Uniform::Model => Cow::Borrowed("model"),
            Uniform::ObjectColor => Cow::Borrowed("objectColor"),
            Uniform::ObjectTexture => Cow::Borrowed("objectTexture"),
            Uniform::UseTexture => Cow::Borrowed("bUseTexture"),
            Uniform::UseLighting => Cow::Borrowed("bUseLighting"),
            Uniform::ViewPosition => Cow::Borrowed("viewPosition"),
            Uniform::UvScale => Cow::Borrowed("UVscale"),
            Uniform::Material(field) => Cow::Owned(format!("material.{}", field.name())),
            Uniform::Light(index, field) => {
                Cow::Owned(format!("lightSources[{}].{}", index, field.name()))
            }
        }
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A value written into a uniform. Matrices are column major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([[f32; 4]; 4]),
    /// Texture unit a sampler reads from, `-1` when unresolved.
    Sampler(i32),
}

/// The active shader program's uniform state.
///
/// Writes are fire-and-forget: an implementor that does not know a uniform
/// drops the value.
pub trait ShaderUniforms {
    fn set(&mut self, uniform: Uniform, value: UniformValue);
}

impl<T: ShaderUniforms + ?Sized> ShaderUniforms for &mut T {
    fn set(&mut self, uniform: Uniform, value: UniformValue) {
        (**self).set(uniform, value)
    }
}
