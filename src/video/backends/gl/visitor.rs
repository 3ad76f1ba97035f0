use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};

use super::super::{
    BufferTarget, ContextInfo, DrawCall, RawId, ShaderStage, VertexAttribute, Visitor,
};
use super::capabilities::Capabilities;

pub struct GLVisitor {
    capabilities: Capabilities,
}

impl GLVisitor {
    /// Creates the visitor over the functions loaded with `gl::load_with`.
    ///
    /// # Unsafe
    ///
    /// The context the functions were loaded from must be current on this thread.
    pub unsafe fn new() -> Result<Self> {
        let loaded = gl::GetString::is_loaded()
            && gl::CreateShader::is_loaded()
            && gl::CreateProgram::is_loaded()
            && gl::GenBuffers::is_loaded()
            && gl::GenVertexArrays::is_loaded()
            && gl::DrawElements::is_loaded();

        if !loaded {
            return Err(Error::Loader(
                "core entry points could not be resolved through the context.".into(),
            ));
        }

        let capabilities = Capabilities::parse()?;
        info!("{:#?}", capabilities);

        capabilities.check()?;
        check()?;

        Ok(GLVisitor { capabilities })
    }

    unsafe fn info_log(len: GLint, fetch: impl FnOnce(GLsizei, *mut GLchar)) -> String {
        if len <= 1 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];
        fetch(len, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(len as usize - 1); // skip the trailing null character
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Visitor for GLVisitor {
    fn info(&self) -> ContextInfo {
        ContextInfo {
            version: self.capabilities.version_desc.clone(),
            vendor: self.capabilities.vendor.clone(),
            renderer: self.capabilities.renderer.clone(),
        }
    }

    unsafe fn create_buffer(&self, target: BufferTarget, bytes: &[u8]) -> Result<RawId> {
        drain();

        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        check()?;

        // Element array bindings belong to the bound vertex array, so every
        // upload goes through GL_ARRAY_BUFFER regardless of `target`.
        gl::BindBuffer(gl::ARRAY_BUFFER, id);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            bytes.len() as GLsizeiptr,
            bytes.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);

        let id = release_on_error(id, check(), |id| gl::DeleteBuffers(1, &id))?;
        debug!("[GL] Uploads {} bytes into {:?} buffer {}.", bytes.len(), target, id);
        Ok(id)
    }

    unsafe fn delete_buffer(&self, id: RawId) {
        gl::DeleteBuffers(1, &id);
    }

    unsafe fn create_vertex_array(
        &self,
        vbo: RawId,
        ibo: Option<RawId>,
        attribute: VertexAttribute,
    ) -> Result<RawId> {
        drain();

        let mut id = 0;
        gl::GenVertexArrays(1, &mut id);
        check()?;

        gl::BindVertexArray(id);
        gl::BindBuffer(BufferTarget::Vertex.into(), vbo);
        if let Some(ibo) = ibo {
            gl::BindBuffer(BufferTarget::Index.into(), ibo);
        }

        gl::VertexAttribPointer(
            attribute.location,
            GLint::from(attribute.components),
            gl::FLOAT,
            gl::FALSE,
            attribute.stride as GLsizei,
            attribute.offset as *const c_void,
        );
        gl::EnableVertexAttribArray(attribute.location);

        // The element buffer binding is part of the vertex array state, so only
        // the array buffer gets unbound.
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        gl::BindVertexArray(0);

        release_on_error(id, check(), |id| gl::DeleteVertexArrays(1, &id))
    }

    unsafe fn delete_vertex_array(&self, id: RawId) {
        gl::DeleteVertexArrays(1, &id);
    }

    unsafe fn create_shader(&self, stage: ShaderStage) -> Result<RawId> {
        let id = gl::CreateShader(stage.into());
        if id == 0 {
            check()?;
            return Err(Error::Backend(format!("[GL] Failed to create {:?} shader.", stage)));
        }

        Ok(id)
    }

    unsafe fn compile_shader(&self, id: RawId, source: &str) -> Result<()> {
        let c_str = CString::new(source.as_bytes())
            .map_err(|_| Error::Backend("[GL] Shader source contains a nul byte.".into()))?;

        gl::ShaderSource(id, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(id);
        check()
    }

    unsafe fn shader_compiled(&self, id: RawId) -> bool {
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
        status == GLint::from(gl::TRUE)
    }

    unsafe fn shader_info_log(&self, id: RawId) -> String {
        let mut len = 0;
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        Self::info_log(len, |len, buf| {
            gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf)
        })
    }

    unsafe fn delete_shader(&self, id: RawId) {
        gl::DeleteShader(id);
    }

    unsafe fn create_program(&self) -> Result<RawId> {
        let id = gl::CreateProgram();
        if id == 0 {
            check()?;
            return Err(Error::Backend("[GL] Failed to create program.".into()));
        }

        Ok(id)
    }

    unsafe fn attach_shader(&self, program: RawId, shader: RawId) {
        gl::AttachShader(program, shader);
    }

    unsafe fn detach_shader(&self, program: RawId, shader: RawId) {
        gl::DetachShader(program, shader);
    }

    unsafe fn link_program(&self, id: RawId) {
        gl::LinkProgram(id);
    }

    unsafe fn program_linked(&self, id: RawId) -> bool {
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
        status == GLint::from(gl::TRUE)
    }

    unsafe fn program_info_log(&self, id: RawId) -> String {
        let mut len = 0;
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
        Self::info_log(len, |len, buf| {
            gl::GetProgramInfoLog(id, len, ptr::null_mut(), buf)
        })
    }

    unsafe fn delete_program(&self, id: RawId) {
        gl::DeleteProgram(id);
    }

    unsafe fn use_program(&self, id: Option<RawId>) {
        gl::UseProgram(id.unwrap_or(0));
    }

    unsafe fn draw(&self, vao: RawId, call: DrawCall) {
        gl::BindVertexArray(vao);

        match call {
            DrawCall::Arrays { count } => gl::DrawArrays(gl::TRIANGLES, 0, count as GLsizei),
            DrawCall::Elements { count } => gl::DrawElements(
                gl::TRIANGLES,
                count as GLsizei,
                gl::UNSIGNED_INT,
                ptr::null(),
            ),
        }

        gl::BindVertexArray(0);
    }

    unsafe fn clear(&self, color: Color) {
        gl::ClearColor(color.r, color.g, color.b, color.a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    unsafe fn set_viewport(&self, dimensions: Vector2<u32>) {
        gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
    }
}

/// Hands `id` back if `result` is fine, otherwise deletes the name before
/// returning the error. No wrapper owns `id` yet at this point.
fn release_on_error<F>(id: RawId, result: Result<()>, delete: F) -> Result<RawId>
where
    F: FnOnce(RawId),
{
    match result {
        Ok(()) => Ok(id),
        Err(err) => {
            delete(id);
            Err(err)
        }
    }
}

/// Clears error flags left behind by earlier calls, so the next `check` only
/// reports errors of the calls that follow it.
unsafe fn drain() {
    for _ in 0..8 {
        match gl::GetError() {
            gl::NO_ERROR => return,
            err => warn!("[GL] Discards stale error 0x{:X}.", err),
        }
    }
}

unsafe fn check() -> Result<()> {
    let msg = match gl::GetError() {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => "[GL] An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "[GL] A numeric argument is out of range.",
        gl::INVALID_OPERATION => {
            "[GL] The specified operation is not allowed in the current state."
        }
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "[GL] The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "[GL] There is not enough memory left to execute the command.",
        _ => "[GL] Oops, Unknown OpenGL error.",
    };

    Err(Error::Backend(msg.into()))
}
