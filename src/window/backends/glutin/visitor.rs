use std::os::raw::c_void;

use glutin;
use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn new(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title)
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (major, minor)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)?;

        unsafe {
            window
                .make_current()
                .map_err(|err| Error::Window(format!("{}", err)))?;
        }

        let visitor = GlutinVisitor {
            window,
            events_loop,
        };

        visitor.resize(visitor.dimensions());
        Ok(visitor)
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f64 {
        self.window.get_hidpi_factor()
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        match self.window.get_inner_size() {
            Some(size) => {
                let size = size.to_physical(self.device_pixel_ratio());
                Vector2::new(size.width as u32, size.height as u32)
            }
            None => Vector2::new(0, 0),
        }
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        self.window.resize(glutin::dpi::PhysicalSize::new(
            f64::from(dimensions.x),
            f64::from(dimensions.y),
        ));
    }

    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dpr = self.device_pixel_ratio();
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dpr) {
                events.push(e);
            }
        });
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current()?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const c_void
    }
}
