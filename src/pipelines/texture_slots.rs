//! WGPU texture backend.
//!
//! WGPU has no global texture units, so the slots live in one bind group:
//! texture `i` at binding `2 * i` and its sampler at `2 * i + 1`. The
//! default limits allow exactly [`MAX_TEXTURE_SLOTS`] sampled textures and
//! samplers per shader stage.

use std::collections::HashMap;

use crate::{
    data_structures::texture::Texture,
    resources::texture::{DecodedImage, MAX_TEXTURE_SLOTS, TextureBackend, TextureHandle},
};

pub fn texture_slots_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let entries: Vec<_> = (0..MAX_TEXTURE_SLOTS as u32)
        .flat_map(|slot| {
            [
                wgpu::BindGroupLayoutEntry {
                    binding: 2 * slot,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2 * slot + 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ]
        })
        .collect();
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &entries,
        label: Some("texture_slots_layout"),
    })
}

/// Uploads textures to the GPU and tracks which one sits in which slot.
///
/// Binding only records the slot. [`bind_group`](Self::bind_group) turns
/// the current slot table into something a render pass can set.
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: HashMap<TextureHandle, Texture>,
    slots: [Option<TextureHandle>; MAX_TEXTURE_SLOTS],
    placeholder: Texture,
    layout: wgpu::BindGroupLayout,
    next_handle: u32,
}

impl WgpuTextures {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self {
            placeholder: Texture::create_placeholder(device, queue),
            layout: texture_slots_layout(device),
            device: device.clone(),
            queue: queue.clone(),
            textures: HashMap::new(),
            slots: [None; MAX_TEXTURE_SLOTS],
            // 0 is never handed out
            next_handle: 1,
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(&handle)
    }

    pub fn slot(&self, slot: usize) -> Option<TextureHandle> {
        self.slots.get(slot).copied().flatten()
    }

    /// Bind group over all slots, with the placeholder in empty ones.
    pub fn bind_group(&self) -> wgpu::BindGroup {
        let bound: Vec<&Texture> = self
            .slots
            .iter()
            .map(|slot| {
                slot.and_then(|handle| self.textures.get(&handle))
                    .unwrap_or(&self.placeholder)
            })
            .collect();
        let entries: Vec<_> = bound
            .iter()
            .enumerate()
            .flat_map(|(slot, texture)| {
                [
                    wgpu::BindGroupEntry {
                        binding: 2 * slot as u32,
                        resource: wgpu::BindingResource::TextureView(&texture.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2 * slot as u32 + 1,
                        resource: wgpu::BindingResource::Sampler(&texture.sampler),
                    },
                ]
            })
            .collect();
        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.layout,
            entries: &entries,
            label: Some("texture_slots_bind_group"),
        })
    }
}

impl TextureBackend for WgpuTextures {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle> {
        let texture = Texture::from_decoded(&self.device, &self.queue, image, label)?;
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.textures.insert(handle, texture);
        Ok(handle)
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        match self.slots.get_mut(slot) {
            Some(entry) => *entry = Some(handle),
            None => log::warn!("Texture slot {slot} does not exist, {handle:?} not bound"),
        }
    }

    fn release(&mut self, handle: TextureHandle) {
        if let Some(texture) = self.textures.remove(&handle) {
            texture.texture.destroy();
        }
        for slot in &mut self.slots {
            if *slot == Some(handle) {
                *slot = None;
            }
        }
    }
}
