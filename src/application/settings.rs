//! Parameters for bootstrapping the application.

use crate::math::prelude::Color;
use crate::video::prelude::{HeadlessDevice, Recorder};
use crate::window::prelude::HeadlessWindow;
use crate::window::WindowParams;

/// A structure containing configuration data for the application, which are
/// used to specify hardware setup stuff to create the window and other
/// context information.
#[derive(Debug, Clone)]
pub struct Settings {
    pub window: WindowParams,
    /// The color every frame is cleared to.
    pub clear_color: Color,
    /// Runs without a display when set.
    pub headless: Option<Headless>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            clear_color: Color::teal(),
            headless: None,
        }
    }
}

/// Parameters of the headless window and device.
#[derive(Debug, Clone, Default)]
pub struct Headless {
    pub window: HeadlessWindow,
    pub device: HeadlessDevice,
    /// Receives every command the headless device issues.
    pub recorder: Recorder,
}
