//! The shapes drawn by the application, and the fixed data they are built from.

mod shape;

pub use self::shape::Shape;

use crate::errors::*;
use crate::video::assets::prelude::*;
use crate::video::backends::ShaderStage;
use crate::video::Device;

pub const TRIANGLE_VS: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

pub const TRIANGLE_FS: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

#[rustfmt::skip]
pub const RECTANGLE_VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
];

#[rustfmt::skip]
pub const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

/// Compiles and links the flat orange program both shapes share. The shader
/// stages are released as soon as the program is linked.
pub fn triangle_program(device: &Device) -> Result<Program> {
    let vs = Shader::compile(device, "triangle_vertex", ShaderStage::Vertex, TRIANGLE_VS)?;
    let fs = Shader::compile(device, "triangle_fragment", ShaderStage::Fragment, TRIANGLE_FS)?;
    Program::link(device, &[&vs, &fs])
}
