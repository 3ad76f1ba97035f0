use std::cmp;
use std::ffi;
use std::str::FromStr;

use gl;
use gl::types::*;

use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parses the string returned by `glGetString(GL_VERSION)`, such as
    /// `"4.6.0 NVIDIA 390.77"`, `"OpenGL ES 3.2 Mesa 18.0.5"` or the ES 1.x
    /// profile form `"OpenGL ES-CM 1.1"`.
    fn from_str(desc: &str) -> Result<Version> {
        const ES_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

        let stripped = ES_PREFIXES.iter().find_map(|v| desc.strip_prefix(*v));
        let (es, desc) = match stripped {
            Some(tail) => (true, tail),
            None => (false, desc),
        };

        let malformed = || Error::Loader(format!("[GL] Version string '{}' is malformed.", desc));

        let desc = desc.split(' ').next().ok_or_else(malformed)?;
        let mut iter = desc.split('.');
        let major = iter.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
        let minor = iter.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        get_string(gl::VERSION)?.parse()
    }
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,
    /// The raw version string.
    pub version_desc: String,
    /// The company responsible for this GL implementation.
    pub vendor: String,
    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,
    /// Whether vertex array objects are available through GL_ARB_vertex_array_object.
    pub gl_arb_vertex_array_object: bool,
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version_desc = get_string(gl::VERSION)?;
        let version = version_desc.parse()?;
        let vendor = get_string(gl::VENDOR)?;
        let renderer = get_string(gl::RENDERER)?;

        let mut gl_arb_vertex_array_object = false;
        if version >= Version::GL(3, 0) || version >= Version::ES(3, 0) {
            let mut num_extensions = 0;
            gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);
            for i in 0..num_extensions {
                let ext = gl::GetStringi(gl::EXTENSIONS, i as GLuint);
                if !ext.is_null()
                    && ffi::CStr::from_ptr(ext as *const _).to_bytes()
                        == b"GL_ARB_vertex_array_object"
                {
                    gl_arb_vertex_array_object = true;
                }
            }
        }

        Ok(Capabilities {
            version,
            version_desc,
            vendor,
            renderer,
            gl_arb_vertex_array_object,
        })
    }

    /// Returns true if the context is at least `desktop` for desktop OpenGL, or at
    /// least `es` for OpenGL ES.
    pub fn at_least(&self, desktop: (u8, u8), es: (u8, u8)) -> bool {
        self.version >= Version::GL(desktop.0, desktop.1) || self.version >= Version::ES(es.0, es.1)
    }

    /// Checks that the context can run a `#version 330 core` shader pair over
    /// vertex array objects.
    pub fn check(&self) -> Result<()> {
        if !self.at_least((2, 0), (2, 0)) {
            return Err(Error::Requirement("shader objects".into()));
        }

        if !self.at_least((3, 0), (3, 0)) && !self.gl_arb_vertex_array_object {
            return Err(Error::Requirement("vertex array objects".into()));
        }

        if !self.at_least((3, 3), (3, 0)) {
            return Err(Error::Requirement("GLSL 330 core".into()));
        }

        Ok(())
    }
}

unsafe fn get_string(name: GLenum) -> Result<String> {
    let desc = gl::GetString(name);
    if desc.is_null() {
        return Err(Error::Loader(format!("[GL] glGetString({:#x}) returned null.", name)));
    }

    String::from_utf8(ffi::CStr::from_ptr(desc as *const _).to_bytes().to_vec())
        .map_err(|_| Error::Loader("[GL] String is unformaled.".into()))
}
