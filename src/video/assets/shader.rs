//! Compiled shader stages and the programs linked from them.

use crate::errors::*;
use crate::video::backends::{RawId, ShaderStage};
use crate::video::Device;

/// A single compiled shader stage.
pub struct Shader<'d> {
    device: &'d Device,
    id: RawId,
    name: String,
    stage: ShaderStage,
}

impl<'d> Shader<'d> {
    /// Compiles `source` as a `stage` shader. `name` only shows up in
    /// diagnostics.
    pub fn compile<T: Into<String>>(
        device: &'d Device,
        name: T,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self> {
        let id = unsafe { device.visitor().create_shader(stage)? };
        let shader = Shader {
            device,
            id,
            name: name.into(),
            stage,
        };

        unsafe { device.visitor().compile_shader(id, source)? };

        if !shader.is_compiled() {
            let log = unsafe { device.visitor().shader_info_log(id) };
            return Err(Error::ShaderCompilation {
                name: shader.name.clone(),
                log,
            });
        }

        debug!("Compiles {:?} shader {} ({}).", stage, shader.name, id);
        Ok(shader)
    }

    /// Queries the compile status of this shader.
    #[inline]
    pub fn is_compiled(&self) -> bool {
        unsafe { self.device.visitor().shader_compiled(self.id) }
    }

    #[inline]
    pub fn id(&self) -> RawId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl<'d> Drop for Shader<'d> {
    fn drop(&mut self) {
        unsafe { self.device.visitor().delete_shader(self.id) }
    }
}

/// A linked program.
///
/// Shaders are only borrowed while linking, and detached afterwards, so they
/// can be dropped as soon as `link` returns.
pub struct Program<'d> {
    device: &'d Device,
    id: RawId,
}

impl<'d> Program<'d> {
    pub fn link(device: &'d Device, shaders: &[&Shader<'d>]) -> Result<Self> {
        let id = unsafe { device.visitor().create_program()? };
        let program = Program { device, id };

        unsafe {
            let visitor = device.visitor();
            for v in shaders {
                visitor.attach_shader(id, v.id);
            }

            visitor.link_program(id);

            for v in shaders {
                visitor.detach_shader(id, v.id);
            }
        }

        if !program.check() {
            let log = unsafe { device.visitor().program_info_log(id) };
            return Err(Error::ProgramLink { log });
        }

        debug!("Links program {} from {} shaders.", id, shaders.len());
        Ok(program)
    }

    /// Queries the link status of this program.
    #[inline]
    pub fn check(&self) -> bool {
        unsafe { self.device.visitor().program_linked(self.id) }
    }

    /// Installs this program as part of the current rendering state.
    #[inline]
    pub fn bind(&self) {
        unsafe { self.device.visitor().use_program(Some(self.id)) }
    }

    #[inline]
    pub fn id(&self) -> RawId {
        self.id
    }
}

impl<'d> Drop for Program<'d> {
    fn drop(&mut self) {
        unsafe { self.device.visitor().delete_program(self.id) }
    }
}
