//! Declarative description of what gets drawn.
//!
//! Each [`ObjectDescriptor`] carries everything one draw needs: the shape,
//! its transform, how its surface is shaded and an optional UV scale. The
//! scene walks the list in order every frame.

use crate::{data_structures::transform::Transform, render::Shape};

/// Where the fragment color of an object comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Sample the texture registered under this tag.
    Texture(String),
    /// Flat RGBA color, texture sampling disabled.
    Color([f32; 4]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDescriptor {
    pub name: String,
    pub shape: Shape,
    pub transform: Transform,
    /// Material tag pushed before the paint, if any.
    pub material: Option<String>,
    pub paint: Paint,
    pub uv_scale: Option<[f32; 2]>,
}

impl ObjectDescriptor {
    pub fn new(name: &str, shape: Shape, transform: Transform, paint: Paint) -> Self {
        Self {
            name: name.to_string(),
            shape,
            transform,
            material: None,
            paint,
            uv_scale: None,
        }
    }

    pub fn with_material(mut self, tag: &str) -> Self {
        self.material = Some(tag.to_string());
        self
    }

    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Some([u, v]);
        self
    }
}

/// A textured bowl with an apple, an orange and a banana on a textured ground plane.
pub fn fruit_bowl() -> Vec<ObjectDescriptor> {
    vec![
        ObjectDescriptor::new(
            "ground",
            Shape::Plane,
            Transform::identity().with_scale(20.0, 1.0, 10.0),
            Paint::Texture("knife_handle".to_string()),
        )
        .with_material("default")
        .with_uv_scale(1.0, 1.0),
        ObjectDescriptor::new(
            "bowl",
            Shape::Sphere,
            Transform::identity()
                .with_scale(2.0, 1.0, 2.0)
                .with_position(0.0, 1.0, 0.0),
            Paint::Texture("knife_handle".to_string()),
        )
        .with_material("default")
        .with_uv_scale(1.0, 1.0),
        ObjectDescriptor::new(
            "apple",
            Shape::Sphere,
            Transform::identity()
                .with_scale(0.5, 0.5, 0.5)
                .with_position(-0.5, 2.0, 0.0),
            Paint::Color([1.0, 0.0, 0.0, 1.0]),
        ),
        ObjectDescriptor::new(
            "orange",
            Shape::Sphere,
            Transform::identity()
                .with_scale(0.6, 0.6, 0.6)
                .with_position(0.5, 2.0, 0.5),
            Paint::Color([1.0, 0.5, 0.0, 1.0]),
        ),
        ObjectDescriptor::new(
            "banana",
            Shape::Cylinder,
            Transform::identity()
                .with_scale(0.3, 0.3, 1.2)
                .with_rotation(90.0, 0.0, 45.0)
                .with_position(0.0, 2.0, -0.5),
            Paint::Color([1.0, 1.0, 0.0, 1.0]),
        ),
    ]
}
