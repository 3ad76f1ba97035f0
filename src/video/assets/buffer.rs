use std::marker::PhantomData;
use std::mem;
use std::slice;

use crate::errors::*;
use crate::video::backends::{BufferTarget, RawId};
use crate::video::Device;

/// The plain numeric types a `Buffer` can hold, and where each one binds.
pub trait BufferElement: Copy + 'static {
    const TARGET: BufferTarget;
}

impl BufferElement for f32 {
    const TARGET: BufferTarget = BufferTarget::Vertex;
}

impl BufferElement for u32 {
    const TARGET: BufferTarget = BufferTarget::Index;
}

/// An immutable block of `T` resident on the GPU.
pub struct Buffer<'d, T: BufferElement> {
    device: &'d Device,
    id: RawId,
    len: usize,
    _phantom: PhantomData<T>,
}

pub type VertexBuffer<'d> = Buffer<'d, f32>;
pub type ElementBuffer<'d> = Buffer<'d, u32>;

impl<'d, T: BufferElement> Buffer<'d, T> {
    /// Uploads `data` once, with a static usage hint.
    pub fn new(device: &'d Device, data: &[T]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        let bytes = unsafe {
            slice::from_raw_parts(data.as_ptr() as *const u8, mem::size_of_val(data))
        };

        let id = unsafe { device.visitor().create_buffer(T::TARGET, bytes)? };
        debug!("Creates {:?} buffer {} with {} elements.", T::TARGET, id, data.len());

        Ok(Buffer {
            device,
            id,
            len: data.len(),
            _phantom: PhantomData,
        })
    }

    #[inline]
    pub fn id(&self) -> RawId {
        self.id
    }

    /// Number of elements of `T`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'d, T: BufferElement> Drop for Buffer<'d, T> {
    fn drop(&mut self) {
        unsafe { self.device.visitor().delete_buffer(self.id) }
    }
}
