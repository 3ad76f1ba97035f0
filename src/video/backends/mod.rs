//! The backend of renderer, which should be responsible for only one thing:
//! issuing the raw calls of low-level OpenGL video APIs.
//!
//! Object ids handed out by a `Visitor` are plain integers. Ownership of
//! them is tracked by the wrappers in `video::assets`, never here.

pub mod headless;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};

/// The raw name of an object living in the GL context.
pub type RawId = u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attributes, `GL_ARRAY_BUFFER`.
    Vertex,
    /// Vertex indices, `GL_ELEMENT_ARRAY_BUFFER`.
    Index,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Describes how one float attribute is laid out inside the bound vertex buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: u8,
    pub stride: usize,
    pub offset: usize,
}

impl VertexAttribute {
    /// A tightly packed `vec3` position at `location`.
    pub fn position(location: u32) -> Self {
        VertexAttribute {
            location,
            components: 3,
            stride: 3 * std::mem::size_of::<f32>(),
            offset: 0,
        }
    }
}

/// A single draw call over the bound vertex array, always as triangles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawCall {
    /// `glDrawArrays` over `count` vertices.
    Arrays { count: u32 },
    /// `glDrawElements` over `count` unsigned int indices.
    Elements { count: u32 },
}

/// Describes the context a backend talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextInfo {
    pub version: String,
    pub vendor: String,
    pub renderer: String,
}

pub trait Visitor {
    fn info(&self) -> ContextInfo;

    unsafe fn create_buffer(&self, target: BufferTarget, bytes: &[u8]) -> Result<RawId>;
    unsafe fn delete_buffer(&self, id: RawId);

    /// Creates a vertex array recording `vbo` under `attribute`, plus `ibo`
    /// as its element buffer if any.
    unsafe fn create_vertex_array(
        &self,
        vbo: RawId,
        ibo: Option<RawId>,
        attribute: VertexAttribute,
    ) -> Result<RawId>;
    unsafe fn delete_vertex_array(&self, id: RawId);

    unsafe fn create_shader(&self, stage: ShaderStage) -> Result<RawId>;
    unsafe fn compile_shader(&self, id: RawId, source: &str) -> Result<()>;
    unsafe fn shader_compiled(&self, id: RawId) -> bool;
    unsafe fn shader_info_log(&self, id: RawId) -> String;
    unsafe fn delete_shader(&self, id: RawId);

    unsafe fn create_program(&self) -> Result<RawId>;
    unsafe fn attach_shader(&self, program: RawId, shader: RawId);
    unsafe fn detach_shader(&self, program: RawId, shader: RawId);
    unsafe fn link_program(&self, id: RawId);
    unsafe fn program_linked(&self, id: RawId) -> bool;
    unsafe fn program_info_log(&self, id: RawId) -> String;
    unsafe fn delete_program(&self, id: RawId);

    unsafe fn use_program(&self, id: Option<RawId>);
    unsafe fn draw(&self, vao: RawId, call: DrawCall);

    unsafe fn clear(&self, color: Color);
    unsafe fn set_viewport(&self, dimensions: Vector2<u32>);
}

pub mod gl;
