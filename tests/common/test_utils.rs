#![allow(dead_code)]

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
    sync::atomic::{AtomicU32, Ordering},
};

use still_life::{
    Shape, ShapeMeshes, ShaderUniforms, TextureBackend, TextureHandle, Uniform, UniformValue,
    resources::texture::DecodedImage,
};

/// One observable interaction with a service, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Set(String, UniformValue),
    LoadMesh(Shape),
    Draw(Shape),
    Upload {
        label: String,
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    },
    Bind(usize, TextureHandle),
    Release(TextureHandle),
}

/// Shader, mesh and texture service in one, logging every call.
///
/// Clones share the log, so one recorder can be handed to the scene three
/// times and still be inspected afterwards.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    next_handle: Rc<RefCell<u32>>,
    fail_uploads: Rc<RefCell<bool>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            next_handle: Rc::new(RefCell::new(100)),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn fail_uploads(&self, fail: bool) {
        *self.fail_uploads.borrow_mut() = fail;
    }

    pub fn uploads(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Upload { .. }))
            .count()
    }

    pub fn binds(&self) -> Vec<(usize, TextureHandle)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Bind(slot, handle) => Some((*slot, *handle)),
                _ => None,
            })
            .collect()
    }

    pub fn releases(&self) -> Vec<TextureHandle> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Release(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }

    /// Values written to `uniform`, oldest first.
    pub fn values_of(&self, uniform: Uniform) -> Vec<UniformValue> {
        let name = uniform.name();
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Set(n, v) if *n == name => Some(*v),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ShaderUniforms for Recorder {
    fn set(&mut self, uniform: Uniform, value: UniformValue) {
        self.push(Call::Set(uniform.name().into_owned(), value));
    }
}

impl ShapeMeshes for Recorder {
    fn load_mesh(&mut self, shape: Shape) {
        self.push(Call::LoadMesh(shape));
    }

    fn draw_mesh(&mut self, shape: Shape) {
        self.push(Call::Draw(shape));
    }
}

impl TextureBackend for Recorder {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle> {
        if *self.fail_uploads.borrow() {
            anyhow::bail!("out of video memory");
        }
        self.push(Call::Upload {
            label: label.to_string(),
            width: image.width,
            height: image.height,
            channels: image.format.channels(),
            pixels: image.pixels.clone(),
        });
        let mut next = self.next_handle.borrow_mut();
        let handle = TextureHandle(*next);
        *next += 1;
        Ok(handle)
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        self.push(Call::Bind(slot, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.push(Call::Release(handle));
    }
}

/// Scratch directory for image fixtures, removed on drop.
pub struct Fixtures {
    dir: PathBuf,
}

impl Fixtures {
    pub fn new() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "still-life-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn rgb(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path(name);
        image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]))
            .save(&path)
            .expect("write rgb fixture");
        path
    }

    pub fn rgba(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path(name);
        image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 40]))
            .save(&path)
            .expect("write rgba fixture");
        path
    }

    /// Single channel grayscale.
    pub fn gray(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path(name);
        image::GrayImage::from_pixel(width, height, image::Luma([128]))
            .save(&path)
            .expect("write gray fixture");
        path
    }

    /// Grayscale with alpha, two channels.
    pub fn gray_alpha(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path(name);
        image::GrayAlphaImage::from_pixel(width, height, image::LumaA([128, 255]))
            .save(&path)
            .expect("write gray alpha fixture");
        path
    }

    /// 1x2 RGB image, red on top, blue at the bottom.
    pub fn red_over_blue(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        let mut img = image::RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.save(&path).expect("write red/blue fixture");
        path
    }

    pub fn garbage(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, b"this is not an image").expect("write garbage fixture");
        path
    }
}

impl Drop for Fixtures {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
