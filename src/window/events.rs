use crate::math::prelude::Vector2;

/// The status of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The framebuffer of window has been resized, in *pixels*.
    Resized(Vector2<u32>),
}

/// The keys the window reports. Everything else is dropped by the backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardEvent {
    Pressed(Key),
    Released(Key),
}

/// The enumerations of all events that come from the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Window(WindowEvent),
    Keyboard(KeyboardEvent),
}

impl Event {
    #[inline]
    pub fn closed() -> Self {
        Event::Window(WindowEvent::Closed)
    }

    #[inline]
    pub fn resized(width: u32, height: u32) -> Self {
        Event::Window(WindowEvent::Resized(Vector2::new(width, height)))
    }

    #[inline]
    pub fn pressed(key: Key) -> Self {
        Event::Keyboard(KeyboardEvent::Pressed(key))
    }

    #[inline]
    pub fn released(key: Key) -> Self {
        Event::Keyboard(KeyboardEvent::Released(key))
    }
}
