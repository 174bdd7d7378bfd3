//! Mesh-drawing seam.
//!
//! Geometry generation and the actual draw calls belong to whoever owns the
//! vertex buffers. The scene only needs to ask for a [`Shape`] to be
//! generated once and drawn with whatever uniform state is current.

use std::fmt;

/// The primitive meshes a scene can be composed of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Flat quad on the xz plane.
    Plane,
    Sphere,
    Cylinder,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Plane => "plane",
            Shape::Sphere => "sphere",
            Shape::Cylinder => "cylinder",
        };
        f.write_str(name)
    }
}

/// Generates and draws the primitive meshes.
///
/// `load_mesh` is called once per shape during preparation, `draw_mesh`
/// once per object and frame. The scene never owns or tears down the
/// implementor.
pub trait ShapeMeshes {
    fn load_mesh(&mut self, shape: Shape);

    fn draw_mesh(&mut self, shape: Shape);
}

impl<T: ShapeMeshes + ?Sized> ShapeMeshes for &mut T {
    fn load_mesh(&mut self, shape: Shape) {
        (**self).load_mesh(shape)
    }

    fn draw_mesh(&mut self, shape: Shape) {
        (**self).draw_mesh(shape)
    }
}
