pub mod headless;

use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    /// Size of the framebuffer in *pixels*.
    fn dimensions(&self) -> Vector2<u32>;
    /// Resizes the GL surface to `dimensions` *pixels*. Some platforms never
    /// do this on their own.
    fn resize(&self, dimensions: Vector2<u32>);
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
    /// Resolves an OpenGL entry point through the context. Null when unknown.
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

pub fn new_headless(params: headless::HeadlessParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::headless::HeadlessVisitor::new(params)?;
    Ok(Box::new(visitor))
}

mod glutin;

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::new(params)?;
    Ok(Box::new(visitor))
}
