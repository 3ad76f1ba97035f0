//! Bootstraps the window, the device and the shapes, then runs the render loop.
//!
//! Startup aborts at the first failing stage and never enters the render
//! loop. Once the loop runs, only a lost context can stop it early.

mod settings;

pub use self::settings::{Headless, Settings};

use crate::errors::*;
use crate::math::prelude::Color;
use crate::scene::Shape;
use crate::video::Device;
use crate::window::events::{Event, Key, WindowEvent};
use crate::window::Window;

/// Runs the application with `settings` until the window closes. Returns the
/// number of frames presented.
pub fn run(settings: Settings) -> Result<u64> {
    let (mut window, device) = match settings.headless {
        Some(headless) => {
            let window = Window::headless(headless.window)?;
            let device = Device::headless_with(headless.device, headless.recorder)?;
            (window, device)
        }
        None => {
            let window = Window::new(settings.window)?;
            let device = Device::new(&window)?;
            (window, device)
        }
    };

    device.set_viewport(window.dimensions());

    let shapes = create_shapes(&device)?;
    let frames = render_loop(&mut window, &device, &shapes, settings.clear_color)?;

    info!("Shuts down after {} frames.", frames);
    Ok(frames)
}

/// Creates the triangle and the rectangle. The failing shape is identified by
/// its position in the returned list.
pub fn create_shapes(device: &Device) -> Result<Vec<Shape>> {
    let triangle = Shape::triangle(device).map_err(|err| Error::shape(0, err))?;
    let rectangle = Shape::rectangle(device).map_err(|err| Error::shape(1, err))?;

    debug!("Creates shapes {} and {}.", triangle.name(), rectangle.name());
    Ok(vec![triangle, rectangle])
}

/// Redraws `shapes` until the window is asked to close. Returns the number of
/// frames presented.
pub fn render_loop(
    window: &mut Window,
    device: &Device,
    shapes: &[Shape],
    clear_color: Color,
) -> Result<u64> {
    let mut frames = 0;

    while !window.should_close() {
        process_input(window);

        clear_color_buffer(device, clear_color);
        for v in shapes {
            v.render();
        }

        window.swap_buffers()?;
        frames += 1;

        for v in window.poll_events() {
            if let Event::Window(WindowEvent::Resized(dimensions)) = *v {
                device.set_viewport(dimensions);
            }
        }
    }

    Ok(frames)
}

/// Asks the window to close once escape is held.
pub fn process_input(window: &mut Window) {
    if window.is_key_pressed(Key::Escape) {
        info!("Escape pressed, closing window.");
        window.set_should_close(true);
    }
}

#[inline]
pub fn clear_color_buffer(device: &Device, color: Color) {
    device.clear(color);
}
