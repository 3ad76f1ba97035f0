use crate::errors::*;
use crate::video::backends::{DrawCall, RawId, VertexAttribute};
use crate::video::Device;

use super::buffer::{ElementBuffer, VertexBuffer};
use super::Drawable;

/// Position data bound to attribute slot 0, optionally drawn through indices.
///
/// The vertex array owns the buffers it describes. Its own handle is deleted
/// before theirs.
pub struct VertexArray<'d> {
    device: &'d Device,
    id: RawId,
    vertices: VertexBuffer<'d>,
    indices: Option<ElementBuffer<'d>>,
}

impl<'d> VertexArray<'d> {
    /// Creates a vertex array drawn with `glDrawArrays`. `vertices` is a flat
    /// list of `x, y, z` positions.
    pub fn new(device: &'d Device, vertices: &[f32]) -> Result<Self> {
        Self::create(device, vertices, None)
    }

    /// Creates a vertex array drawn with `glDrawElements` over `indices`.
    pub fn indexed(device: &'d Device, vertices: &[f32], indices: &[u32]) -> Result<Self> {
        Self::create(device, vertices, Some(indices))
    }

    fn create(device: &'d Device, vertices: &[f32], indices: Option<&[u32]>) -> Result<Self> {
        if vertices.len() % 3 != 0 {
            return Err(Error::VertexLayout(vertices.len()));
        }

        let vertices = VertexBuffer::new(device, vertices)?;
        let indices = match indices {
            Some(v) => Some(ElementBuffer::new(device, v)?),
            None => None,
        };

        let id = unsafe {
            device.visitor().create_vertex_array(
                vertices.id(),
                indices.as_ref().map(|v| v.id()),
                VertexAttribute::position(0),
            )?
        };

        debug!("Creates vertex array {}.", id);
        Ok(VertexArray {
            device,
            id,
            vertices,
            indices,
        })
    }

    #[inline]
    pub fn id(&self) -> RawId {
        self.id
    }

    /// The draw call this vertex array issues.
    pub fn draw_call(&self) -> DrawCall {
        match self.indices {
            Some(ref v) => DrawCall::Elements {
                count: v.len() as u32,
            },
            None => DrawCall::Arrays {
                count: (self.vertices.len() / 3) as u32,
            },
        }
    }
}

impl<'d> Drawable for VertexArray<'d> {
    fn draw(&self) {
        unsafe { self.device.visitor().draw(self.id, self.draw_call()) }
    }
}

impl<'d> Drop for VertexArray<'d> {
    fn drop(&mut self) {
        unsafe { self.device.visitor().delete_vertex_array(self.id) }
    }
}
