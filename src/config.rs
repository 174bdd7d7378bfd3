//! Scene configuration.
//!
//! [`SceneConfig::default`] is the fruit bowl. Every part of it can be
//! replaced before the scene is prepared, either field by field or through
//! the `with_*` builders.

use std::path::{Path, PathBuf};

use crate::{
    data_structures::{
        light::{LightSource, default_lights},
        material::Material,
        scene_object::{ObjectDescriptor, fruit_bowl},
    },
    resources::texture::TextureSource,
};

/// Environment variable overriding [`SceneConfig::asset_root`].
pub const ASSET_ROOT_ENV: &str = "STILL_LIFE_ASSET_ROOT";

#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Directory relative texture paths are resolved against.
    pub asset_root: PathBuf,
    pub textures: Vec<TextureSource>,
    /// Appended after the built-in materials.
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    /// Camera position used for specular highlights.
    pub view_position: [f32; 3],
    pub objects: Vec<ObjectDescriptor>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            textures: vec![TextureSource::new(
                "textures/knife_handle.jpg",
                "knife_handle",
            )],
            materials: Vec::new(),
            lights: default_lights(),
            view_position: [0.0, 0.0, 3.0],
            objects: fruit_bowl(),
        }
    }
}

impl SceneConfig {
    /// Defaults, with the asset root taken from `STILL_LIFE_ASSET_ROOT` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(root) = std::env::var_os(ASSET_ROOT_ENV) {
            config.asset_root = PathBuf::from(root);
        }
        config
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_textures(mut self, textures: Vec<TextureSource>) -> Self {
        self.textures = textures;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_lights(mut self, lights: Vec<LightSource>) -> Self {
        self.lights = lights;
        self
    }

    pub fn with_objects(mut self, objects: Vec<ObjectDescriptor>) -> Self {
        self.objects = objects;
        self
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}
