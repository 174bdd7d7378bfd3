//! Texture loading and the tag → slot registry.

use std::path::{Path, PathBuf};

use crate::error::SceneError;

/// Number of texture units a draw can sample from.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Backend-assigned identifier of an uploaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Pixel layout of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Host-side pixels ready to be uploaded, bottom row first.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Decode `path` and flip it vertically so that row 0 is the bottom of
    /// the picture, which is where texture coordinate v = 0 samples.
    ///
    /// Only 3 and 4 channel images are accepted. 16 bit and float images
    /// with those channel counts are narrowed to 8 bit.
    pub fn open(path: &Path) -> Result<Self, SceneError> {
        let img = image::open(path).map_err(|source| SceneError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let img = img.flipv();
        let (width, height) = (img.width(), img.height());
        match img.color().channel_count() {
            3 => Ok(Self {
                width,
                height,
                format: PixelFormat::Rgb8,
                pixels: img.into_rgb8().into_raw(),
            }),
            4 => Ok(Self {
                width,
                height,
                format: PixelFormat::Rgba8,
                pixels: img.into_rgba8().into_raw(),
            }),
            channels => Err(SceneError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            }),
        }
    }

    /// Expand to 4 channels, opaque alpha for RGB input.
    pub fn to_rgba8(&self) -> Vec<u8> {
        match self.format {
            PixelFormat::Rgba8 => self.pixels.clone(),
            PixelFormat::Rgb8 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
                .collect(),
        }
    }
}

/// GPU side of the registry: owns the actual texture objects.
pub trait TextureBackend {
    /// Create a 2D texture with repeat wrapping, linear filtering and a full mip chain.
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle>;

    /// Make `handle` the texture sampled through unit `slot`.
    fn bind(&mut self, slot: usize, handle: TextureHandle);

    fn release(&mut self, handle: TextureHandle);
}

impl<T: TextureBackend + ?Sized> TextureBackend for &mut T {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle> {
        (**self).upload(image, label)
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        (**self).bind(slot, handle)
    }

    fn release(&mut self, handle: TextureHandle) {
        (**self).release(handle)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureBinding {
    pub handle: TextureHandle,
    pub tag: String,
}

/// Ordered list of loaded textures, at most [`MAX_TEXTURE_SLOTS`] long.
///
/// A texture's slot is its registration index. Tags are not unique: a tag
/// registered twice resolves to the first entry. All textures are released
/// when the registry is dropped.
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    bindings: Vec<TextureBinding>,
}

impl<B: TextureBackend> TextureRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bindings: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Decode `path`, upload it and register it under `tag`.
    ///
    /// Nothing is registered when this fails.
    pub fn load(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<TextureHandle, SceneError> {
        let path = path.as_ref();
        let result = self.try_load(path, tag);
        if let Err(e) = &result {
            log::error!("Could not load texture \"{tag}\": {e}");
        }
        result
    }

    fn try_load(&mut self, path: &Path, tag: &str) -> Result<TextureHandle, SceneError> {
        if self.bindings.len() >= MAX_TEXTURE_SLOTS {
            return Err(SceneError::CapacityExceeded {
                tag: tag.to_string(),
                capacity: MAX_TEXTURE_SLOTS,
            });
        }

        let image = DecodedImage::open(path)?;
        log::info!(
            "Loaded image {}, width: {}, height: {}, channels: {}",
            path.display(),
            image.width,
            image.height,
            image.format.channels()
        );

        let handle = self
            .backend
            .upload(&image, tag)
            .map_err(|source| SceneError::Upload {
                tag: tag.to_string(),
                source,
            })?;
        self.bindings.push(TextureBinding {
            handle,
            tag: tag.to_string(),
        });
        Ok(handle)
    }

    /// Bind every texture to the unit matching its registration index.
    pub fn bind_all(&mut self) {
        for (slot, binding) in self.bindings.iter().enumerate() {
            self.backend.bind(slot, binding.handle);
        }
    }

    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.bindings
            .iter()
            .find(|binding| binding.tag == tag)
            .map(|binding| binding.handle)
    }

    /// Texture unit of the first texture tagged `tag`.
    ///
    /// Only meaningful after [`bind_all`](Self::bind_all).
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.tag == tag)
    }

    /// Delete every texture from the backend and empty the registry.
    pub fn release_all(&mut self) {
        for binding in self.bindings.drain(..) {
            self.backend.release(binding.handle);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[TextureBinding] {
        &self.bindings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: TextureBackend> Drop for TextureRegistry<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// An image file and the tag it is registered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSource {
    /// Relative to the scene's asset root unless absolute.
    pub path: PathBuf,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: &str) -> Self {
        Self {
            path: path.into(),
            tag: tag.to_string(),
        }
    }
}
