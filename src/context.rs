use anyhow::Context as _;

/// GPU device and queue without a window.
///
/// Enough to upload textures and fill uniform buffers. A windowed renderer
/// that already owns a device can skip this and hand its own device and
/// queue to [`WgpuTextures`](crate::pipelines::texture_slots::WgpuTextures)
/// and [`GpuUniforms`](crate::pipelines::scene_uniform::GpuUniforms).
#[derive(Debug)]
pub struct Context {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Context {
    pub async fn new_headless() -> anyhow::Result<Self> {
        log::info!("WGPU headless setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter")?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("still-life device"),
                required_features: wgpu::Features::empty(),
                // 16 sampled textures and samplers per stage are part of the defaults
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("could not create GPU device")?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Blocking variant of [`new_headless`](Self::new_headless).
    pub fn headless() -> anyhow::Result<Self> {
        futures::executor::block_on(Self::new_headless())
    }
}
