//! Loads the OpenGL functions of a window's context, and owns the objects
//! created through them.
//!
//! A [`Device`] is the proof that function pointers have been resolved against
//! a current context. Every wrapper in [`assets`] borrows the device it was
//! created from, so the borrow checker keeps GPU objects from outliving it.

pub mod assets;
pub mod backends;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::backends::headless::{
        Command, DeviceFault, HeadlessParams as HeadlessDevice, Object, Recorder,
    };
    pub use super::backends::{BufferTarget, ContextInfo, DrawCall, ShaderStage};
    pub use super::Device;
}

use gl;

use self::backends::headless::{HeadlessParams, HeadlessVisitor, Recorder};
use self::backends::{ContextInfo, Visitor};

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};
use crate::window::Window;

pub struct Device {
    visitor: Box<dyn Visitor>,
    info: ContextInfo,
}

impl Device {
    /// Resolves the OpenGL entry points through the context of `window`, and
    /// checks that the context is able to run the scene.
    pub fn new(window: &Window) -> Result<Self> {
        if !window.is_current() {
            window
                .make_current()
                .map_err(|err| Error::Loader(format!("{}", err)))?;
        }

        gl::load_with(|symbol| window.get_proc_address(symbol));

        let visitor = unsafe { backends::gl::GLVisitor::new() }.map_err(|err| match err {
            Error::Loader(_) | Error::Requirement(_) => err,
            other => Error::Loader(format!("{}", other)),
        })?;

        Ok(Device::from_visitor(Box::new(visitor)))
    }

    /// Creates a device that records its calls instead of issuing them.
    pub fn headless(params: HeadlessParams) -> Result<(Self, Recorder)> {
        let recorder = Recorder::default();
        let device = Device::headless_with(params, recorder.clone())?;
        Ok((device, recorder))
    }

    /// Creates a headless device that records into `recorder`.
    pub fn headless_with(params: HeadlessParams, recorder: Recorder) -> Result<Self> {
        let visitor = HeadlessVisitor::new(params, recorder)?;
        Ok(Device::from_visitor(Box::new(visitor)))
    }

    fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        let info = visitor.info();
        info!(
            "OpenGL {} ({}, {}).",
            info.version, info.vendor, info.renderer
        );

        Device { visitor, info }
    }

    #[inline]
    pub fn info(&self) -> &ContextInfo {
        &self.info
    }

    /// Clears the color buffer of the default framebuffer.
    #[inline]
    pub fn clear(&self, color: Color) {
        unsafe { self.visitor.clear(color.clip()) }
    }

    /// Maps normalized device coordinates onto `dimensions` pixels.
    #[inline]
    pub fn set_viewport(&self, dimensions: Vector2<u32>) {
        debug!("Sets viewport to {}x{}.", dimensions.x, dimensions.y);
        unsafe { self.visitor.set_viewport(dimensions) }
    }

    #[inline]
    pub(crate) fn visitor(&self) -> &dyn Visitor {
        self.visitor.as_ref()
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        debug!("Releases OpenGL device.");
    }
}
