use crate::errors::*;
use crate::video::assets::prelude::*;
use crate::video::Device;

use super::{triangle_program, RECTANGLE_INDICES, RECTANGLE_VERTICES, TRIANGLE_VERTICES};

/// A linked program together with the geometry it draws.
///
/// A `Shape` can only be built out of resources that were created
/// successfully, so rendering one never touches a half-initialized object.
pub struct Shape<'d> {
    name: &'static str,
    mesh: Box<dyn Drawable + 'd>,
    program: Program<'d>,
}

impl<'d> Shape<'d> {
    pub fn new<T>(name: &'static str, mesh: T, program: Program<'d>) -> Self
    where
        T: Drawable + 'd,
    {
        Shape {
            name,
            mesh: Box::new(mesh),
            program,
        }
    }

    /// Three vertices drawn with `glDrawArrays`.
    pub fn triangle(device: &'d Device) -> Result<Self> {
        let mesh = VertexArray::new(device, &TRIANGLE_VERTICES)?;
        let program = triangle_program(device)?;
        Ok(Shape::new("triangle", mesh, program))
    }

    /// Four vertices drawn as two triangles with `glDrawElements`.
    pub fn rectangle(device: &'d Device) -> Result<Self> {
        let mesh = VertexArray::indexed(device, &RECTANGLE_VERTICES, &RECTANGLE_INDICES)?;
        let program = triangle_program(device)?;
        Ok(Shape::new("rectangle", mesh, program))
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Binds the program, then draws the geometry with it.
    pub fn render(&self) {
        self.program.bind();
        self.mesh.draw();
    }
}
