//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around a WGPU texture with its
//! view and sampler. Scene textures are uploaded from a
//! [`DecodedImage`](crate::resources::texture::DecodedImage) with a full mip
//! chain built on the CPU, since WGPU has no built-in mipmap generation.

use image::{RgbaImage, imageops::FilterType};

use crate::resources::texture::DecodedImage;

/// A GPU texture with a view and sampler.
///
/// Created via [`from_decoded`](Self::from_decoded) for scene textures, or
/// [`create_placeholder`](Self::create_placeholder) for the 1x1 texture that
/// fills otherwise empty slots.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub mip_level_count: u32,
}

impl Texture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Number of levels in a full mip chain for the given size.
    pub fn mip_levels_for(width: u32, height: u32) -> u32 {
        32 - width.max(height).max(1).leading_zeros()
    }

    /// Upload `image` as a 2D texture and fill every mip level.
    ///
    /// Fails without touching the device when either side is larger than
    /// `max_texture_dimension_2d`.
    ///
    /// # Arguments
    ///
    /// * `image` holds 3 or 4 channel pixels, bottom row first
    /// * `label` is used as a debug name for the GPU resource
    pub fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
    ) -> anyhow::Result<Self> {
        let max_dimension = device.limits().max_texture_dimension_2d;
        if image.width > max_dimension || image.height > max_dimension {
            anyhow::bail!(
                "{label} is {}x{}, the device allows at most {max_dimension} per side",
                image.width,
                image.height
            );
        }
        let rgba = RgbaImage::from_raw(image.width, image.height, image.to_rgba8())
            .ok_or_else(|| anyhow::anyhow!("pixel buffer of {label} does not match its size"))?;
        let mip_level_count = Self::mip_levels_for(image.width, image.height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let mut level_image = rgba;
        for mip_level in 0..mip_level_count {
            if mip_level > 0 {
                let width = (level_image.width() / 2).max(1);
                let height = (level_image.height() / 2).max(1);
                level_image =
                    image::imageops::resize(&level_image, width, height, FilterType::Triangle);
            }
            write_level(queue, &texture, mip_level, &level_image);
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);

        Ok(Self {
            texture,
            view,
            sampler,
            mip_level_count,
        })
    }

    /// Create a solid white 1x1 texture.
    ///
    /// Bound to every slot that has no scene texture so the bind group is
    /// always complete.
    pub fn create_placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Texture {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("placeholder texture"),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        write_level(
            queue,
            &texture,
            0,
            &RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255])),
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);
        Texture {
            texture,
            view,
            sampler,
            mip_level_count: 1,
        }
    }
}

fn write_level(queue: &wgpu::Queue, texture: &wgpu::Texture, mip_level: u32, pixels: &RgbaImage) {
    let (width, height) = pixels.dimensions();
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture,
            mip_level,
            origin: wgpu::Origin3d::ZERO,
        },
        pixels.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
}

/// Repeat wrapping with linear filtering between texels and mip levels.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}
