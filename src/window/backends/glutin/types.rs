use glutin;

use super::super::super::events::{Event, Key, KeyboardEvent, WindowEvent};

use crate::math::prelude::Vector2;

pub fn from_event(source: glutin::Event, dpr: f64) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event, dpr),
        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent, dpr: f64) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => {
            if v {
                Some(Event::Window(WindowEvent::GainFocus))
            } else {
                Some(Event::Window(WindowEvent::LostFocus))
            }
        }

        glutin::WindowEvent::Resized(size) => {
            let size = size.to_physical(dpr);
            Some(Event::Window(WindowEvent::Resized(Vector2::new(
                size.width as u32,
                size.height as u32,
            ))))
        }

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key).map(|key| match state {
            glutin::ElementState::Pressed => Event::Keyboard(KeyboardEvent::Pressed(key)),
            glutin::ElementState::Released => Event::Keyboard(KeyboardEvent::Released(key)),
        }),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}
