//! Scene preparation and per-frame rendering.
//!
//! [`SceneManager`] ties the texture registry and material catalog it owns
//! to the shader and mesh services it borrows. The lifecycle is:
//!
//! 1. [`prepare`](SceneManager::prepare) once: load textures, bind them to
//!    their slots, define materials, push the lights, generate meshes
//! 2. [`render`](SceneManager::render) every frame: push the view position,
//!    then per object its transform, surface and UV scale, and draw it
//!
//! `render` is a fixed script over the configured objects, so consecutive
//! calls issue identical uniform writes and draws.

use crate::{
    config::SceneConfig,
    data_structures::{
        material::MaterialCatalog,
        scene_object::{ObjectDescriptor, Paint},
    },
    error::SceneError,
    pipelines::{shader_state::ShaderState, uniforms::ShaderUniforms},
    render::{Shape, ShapeMeshes},
    resources::texture::{TextureBackend, TextureRegistry},
};

pub struct SceneManager<S, M, B>
where
    S: ShaderUniforms,
    M: ShapeMeshes,
    B: TextureBackend,
{
    config: SceneConfig,
    /// Without a shader every uniform push is skipped; draws still happen.
    shader: Option<S>,
    meshes: M,
    textures: TextureRegistry<B>,
    materials: MaterialCatalog,
    prepared: bool,
}

impl<S, M, B> SceneManager<S, M, B>
where
    S: ShaderUniforms,
    M: ShapeMeshes,
    B: TextureBackend,
{
    /// The services may be passed as `&mut` borrows; the scene never
    /// destroys them.
    pub fn new(config: SceneConfig, shader: Option<S>, meshes: M, textures: B) -> Self {
        Self {
            config,
            shader,
            meshes,
            textures: TextureRegistry::new(textures),
            materials: MaterialCatalog::new(),
            prepared: false,
        }
    }

    /// Load and define everything the scene needs. Runs once.
    ///
    /// A texture that fails to load is logged and skipped; objects using
    /// its tag then sample slot `-1`.
    pub fn prepare(&mut self) -> Result<(), SceneError> {
        if self.prepared {
            return Err(SceneError::AlreadyPrepared);
        }

        self.load_textures();

        self.materials.define_defaults();
        for material in &self.config.materials {
            self.materials.define(material.clone());
        }

        if let Some(shader) = self.shader.as_mut() {
            shader.setup_lights(&self.config.lights);
        }

        for shape in self.shapes() {
            log::debug!("Generating {shape} mesh");
            self.meshes.load_mesh(shape);
        }

        self.prepared = true;
        Ok(())
    }

    fn load_textures(&mut self) {
        for source in &self.config.textures {
            let path = self.config.resolve(&source.path);
            // Failures are already logged by the registry.
            let _ = self.textures.load(&path, &source.tag);
        }
        self.textures.bind_all();
        log::info!(
            "{} of {} scene textures bound",
            self.textures.len(),
            self.config.textures.len()
        );
    }

    /// Distinct shapes in order of first use.
    fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for object in &self.config.objects {
            if !shapes.contains(&object.shape) {
                shapes.push(object.shape);
            }
        }
        shapes
    }

    pub fn render(&mut self) -> Result<(), SceneError> {
        if !self.prepared {
            return Err(SceneError::NotPrepared);
        }

        if let Some(shader) = self.shader.as_mut() {
            shader.set_view_position(self.config.view_position);
        }
        for object in &self.config.objects {
            if let Some(shader) = self.shader.as_mut() {
                push_object(shader, &self.textures, &self.materials, object);
            }
            self.meshes.draw_mesh(object.shape);
        }
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    pub fn shader(&self) -> Option<&S> {
        self.shader.as_ref()
    }

    pub fn meshes(&self) -> &M {
        &self.meshes
    }
}

fn push_object<S, B>(
    shader: &mut S,
    textures: &TextureRegistry<B>,
    materials: &MaterialCatalog,
    object: &ObjectDescriptor,
) where
    S: ShaderUniforms,
    B: TextureBackend,
{
    shader.set_transform(&object.transform);
    if let Some(tag) = &object.material {
        shader.set_material(materials, tag);
    }
    match &object.paint {
        Paint::Texture(tag) => shader.set_texture(textures, tag),
        Paint::Color(rgba) => shader.set_solid_color(*rgba),
    }
    if let Some([u, v]) = object.uv_scale {
        shader.set_uv_scale(u, v);
    }
}
