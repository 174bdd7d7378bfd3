use cgmath::Vector3;

/// A point light as the shader sees it. Never stored beyond the config,
/// only pushed as uniform state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Specular exponent of the highlight this light produces.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    pub fn new(
        position: [f32; 3],
        ambient_color: [f32; 3],
        diffuse_color: [f32; 3],
        specular_color: [f32; 3],
        focal_strength: f32,
        specular_intensity: f32,
    ) -> Self {
        Self {
            position: position.into(),
            ambient_color: ambient_color.into(),
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            focal_strength,
            specular_intensity,
        }
    }
}

/// White key light, red rim light from the opposite corner and a dim fill from above.
pub fn default_lights() -> Vec<LightSource> {
    vec![
        LightSource::new(
            [5.0, 10.0, 5.0],
            [0.2, 0.2, 0.2],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            32.0,
            1.0,
        ),
        LightSource::new(
            [-5.0, 10.0, -5.0],
            [0.1, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            32.0,
            1.0,
        ),
        LightSource::new(
            [0.0, 10.0, 0.0],
            [0.2, 0.2, 0.2],
            [0.7, 0.7, 0.7],
            [0.7, 0.7, 0.7],
            32.0,
            0.5,
        ),
    ]
}
