//! Represents an OpenGL context and the window around it.
//!
//! Creating a [`Window`] initializes the windowing platform, opens the window
//! and makes its OpenGL context current on the calling thread. Dropping it
//! destroys the context and the window, exactly once.

pub mod events;

pub mod prelude {
    pub use super::backends::headless::{HeadlessParams as HeadlessWindow, WindowFault};
    pub use super::events::{Event, Key, KeyboardEvent, WindowEvent};
    pub use super::{Window, WindowParams};
}

mod backends;

use std::collections::HashSet;
use std::os::raw::c_void;

use self::backends::headless::HeadlessParams;
use self::backends::Visitor;
use self::events::{Event, Key, KeyboardEvent, WindowEvent};

use crate::errors::*;
use crate::math::prelude::Vector2;

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// The `(major, minor)` version of the core profile context to request.
    pub gl_version: (u8, u8),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "LearnOpenGL".to_owned(),
            size: Vector2::new(800, 600),
            gl_version: (3, 3),
            multisample: 0,
            vsync: true,
        }
    }
}

pub struct Window {
    visitor: Box<dyn Visitor>,
    should_close: bool,
    keys: HashSet<Key>,
    events: Vec<Event>,
}

impl Window {
    /// Opens a native window with a current OpenGL context.
    pub fn new(params: WindowParams) -> Result<Self> {
        info!(
            "Creates window \"{}\" ({}x{}) with OpenGL {}.{} core context.",
            params.title, params.size.x, params.size.y, params.gl_version.0, params.gl_version.1
        );

        let visitor = backends::new(params)?;
        Ok(Window::from_visitor(visitor))
    }

    /// Opens a window without any display attached.
    pub fn headless(params: HeadlessParams) -> Result<Self> {
        info!("Creates headless window.");

        let visitor = backends::new_headless(params)?;
        Ok(Window::from_visitor(visitor))
    }

    fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        Window {
            visitor,
            should_close: false,
            keys: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Returns true once the window has been asked to close, either by the
    /// user or through `set_should_close`.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    #[inline]
    pub fn set_should_close(&mut self, close: bool) {
        self.should_close = close;
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Returns the size in *pixels* of the framebuffer.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Swaps the buffers in case of double or triple buffering.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Returns the address of an OpenGL function.
    #[inline]
    pub fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.visitor.get_proc_address(symbol)
    }

    /// Polls the events that have arrived since the last call, and applies
    /// them to the close flag, the pressed-key set and the surface size.
    pub fn poll_events(&mut self) -> &[Event] {
        self.events.clear();
        self.visitor.poll_events(&mut self.events);

        for v in &self.events {
            match *v {
                Event::Window(WindowEvent::Closed) => self.should_close = true,
                Event::Window(WindowEvent::LostFocus) => self.keys.clear(),
                Event::Window(WindowEvent::Resized(dimensions)) => {
                    self.visitor.resize(dimensions);
                }
                Event::Keyboard(KeyboardEvent::Pressed(key)) => {
                    self.keys.insert(key);
                }
                Event::Keyboard(KeyboardEvent::Released(key)) => {
                    self.keys.remove(&key);
                }
                _ => {}
            }
        }

        &self.events
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        info!("Destroys window.");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scripted(script: Vec<Vec<Event>>) -> Window {
        Window::headless(HeadlessParams {
            script,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn key_state() {
        let mut window = scripted(vec![
            vec![Event::pressed(Key::Escape)],
            vec![],
            vec![Event::released(Key::Escape)],
            vec![Event::pressed(Key::Escape)],
            vec![Event::Window(WindowEvent::LostFocus)],
        ]);

        window.poll_events();
        assert!(window.is_key_pressed(Key::Escape));

        window.poll_events();
        assert!(window.is_key_pressed(Key::Escape));

        window.poll_events();
        assert!(!window.is_key_pressed(Key::Escape));

        window.poll_events();
        assert!(window.is_key_pressed(Key::Escape));

        window.poll_events();
        assert!(!window.is_key_pressed(Key::Escape));
        assert!(!window.should_close());
    }

    #[test]
    fn closes_when_script_ends() {
        let mut window = scripted(vec![vec![]]);
        assert!(window.poll_events().is_empty());
        assert!(!window.should_close());

        assert_eq!(window.poll_events(), &[Event::closed()]);
        assert!(window.should_close());
    }

    #[test]
    fn resize_updates_dimensions() {
        let mut window = scripted(vec![vec![Event::resized(1024, 768)]]);
        assert_eq!(window.dimensions(), Vector2::new(800, 600));

        window.poll_events();
        assert_eq!(window.dimensions(), Vector2::new(1024, 768));
    }
}
