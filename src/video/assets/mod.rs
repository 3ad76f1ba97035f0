//! Owning wrappers over GPU objects.
//!
//! Each wrapper performs the creation call in its constructor and the
//! deletion call in its `Drop`. None of them is `Clone`, so every handle has
//! exactly one owner and is released exactly once.

pub mod buffer;
pub mod shader;
pub mod vertex_array;

pub mod prelude {
    pub use super::buffer::{Buffer, BufferElement, ElementBuffer, VertexBuffer};
    pub use super::shader::{Program, Shader};
    pub use super::vertex_array::VertexArray;
    pub use super::Drawable;
}

/// Something that can issue its own draw call with the program in use.
pub trait Drawable {
    fn draw(&self);
}
