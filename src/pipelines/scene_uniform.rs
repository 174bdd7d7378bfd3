//! WGPU uniform service.
//!
//! [`GpuUniforms`] keeps a CPU copy of the scene shader's uniform block and
//! writes it to a uniform buffer on request. The layout follows WGSL
//! uniform rules: every `vec3` is padded out to 16 bytes by the scalar that
//! follows it or by an explicit padding field.

use wgpu::util::DeviceExt;

use crate::pipelines::uniforms::{
    LightField, MAX_LIGHTS, MaterialField, ShaderUniforms, Uniform, UniformValue,
};

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    _padding: u32,
    pub specular_color: [f32; 3],
    pub shininess: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    _padding: u32,
    pub specular_color: [f32; 3],
    _padding2: u32,
}

/// The whole uniform block of the scene shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub view_position: [f32; 3],
    pub object_texture: i32,
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub use_lighting: u32,
    pub material: MaterialUniform,
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self {
            model: cgmath::Matrix4::from_scale(1.0f32).into(),
            object_color: [1.0, 1.0, 1.0, 1.0],
            view_position: [0.0; 3],
            object_texture: -1,
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            use_lighting: 0,
            material: MaterialUniform::default(),
            lights: [LightUniform::default(); MAX_LIGHTS],
        }
    }
}

impl SceneUniform {
    /// Store `value` in the field `uniform` names.
    ///
    /// Returns `false` when the uniform does not exist in this block or
    /// `value` has the wrong type for it; the block is then unchanged.
    pub fn apply(&mut self, uniform: Uniform, value: UniformValue) -> bool {
        use UniformValue as V;
        match (uniform, value) {
            (Uniform::Model, V::Mat4(m)) => self.model = m,
            (Uniform::ObjectColor, V::Vec4(c)) => self.object_color = c,
            (Uniform::ObjectTexture, V::Sampler(s)) => self.object_texture = s,
            (Uniform::UseTexture, V::Bool(b)) => self.use_texture = b as u32,
            (Uniform::UseLighting, V::Bool(b)) => self.use_lighting = b as u32,
            (Uniform::ViewPosition, V::Vec3(p)) => self.view_position = p,
            (Uniform::UvScale, V::Vec2(uv)) => self.uv_scale = uv,
            (Uniform::Material(field), value) => {
                let m = &mut self.material;
                match (field, value) {
                    (MaterialField::AmbientColor, V::Vec3(c)) => m.ambient_color = c,
                    (MaterialField::AmbientStrength, V::Float(f)) => m.ambient_strength = f,
                    (MaterialField::DiffuseColor, V::Vec3(c)) => m.diffuse_color = c,
                    (MaterialField::SpecularColor, V::Vec3(c)) => m.specular_color = c,
                    (MaterialField::Shininess, V::Float(f)) => m.shininess = f,
                    _ => return false,
                }
            }
            (Uniform::Light(index, field), value) => {
                let Some(l) = self.lights.get_mut(index) else {
                    return false;
                };
                match (field, value) {
                    (LightField::Position, V::Vec3(p)) => l.position = p,
                    (LightField::AmbientColor, V::Vec3(c)) => l.ambient_color = c,
                    (LightField::DiffuseColor, V::Vec3(c)) => l.diffuse_color = c,
                    (LightField::SpecularColor, V::Vec3(c)) => l.specular_color = c,
                    (LightField::FocalStrength, V::Float(f)) => l.focal_strength = f,
                    (LightField::SpecularIntensity, V::Float(f)) => l.specular_intensity = f,
                    _ => return false,
                }
            }
            _ => return false,
        }
        true
    }
}

pub fn mk_buffer(device: &wgpu::Device, scene_uniform: SceneUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Scene Uniform Buffer"),
        contents: bytemuck::cast_slice(&[scene_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("scene_uniform_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
        label: Some("scene_uniform_bind_group"),
    })
}

/// Uniform service backed by a WGPU buffer.
///
/// `set` only touches the CPU copy. Whoever issues the draw calls writes it
/// out with [`write_to_buffer`](Self::write_to_buffer) right before drawing.
pub struct GpuUniforms {
    pub uniform: SceneUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl GpuUniforms {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform = SceneUniform::default();
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

impl ShaderUniforms for GpuUniforms {
    fn set(&mut self, uniform: Uniform, value: UniformValue) {
        if !self.uniform.apply(uniform, value) {
            log::warn!("Uniform {uniform} does not accept {value:?}, ignored");
        }
    }
}
