//! # What is This?
//!
//! A small OpenGL scaffold: it opens a window with a 3.3 core context, loads
//! the GL entry points, compiles a trivial shader pair and draws a triangle
//! and an indexed rectangle until the window is closed or escape is pressed.
//!
//! Every GPU object lives inside an owning wrapper from [`video::assets`]
//! whose `Drop` releases the handle exactly once. Wrappers borrow the
//! [`video::Device`] they were created from, so none of them can outlive the
//! loaded context.
//!
//! Both the windowing layer and the GPU layer are reached through `Visitor`
//! backends. Besides the `glutin`/`gl` implementations there are headless
//! ones, which are what the integration tests drive.

extern crate cgmath;
extern crate failure;
extern crate gl;
extern crate glutin;
#[macro_use]
extern crate log;

pub mod errors;
pub mod math;

pub mod window;
pub mod video;

pub mod scene;
pub mod application;

pub mod prelude {
    pub use crate::application::{run, Headless, Settings};
    pub use crate::errors::{Error, Result};
    pub use crate::math::prelude::*;
    pub use crate::scene::Shape;
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
