//! The error type shared by every layer, and its mapping onto process exit codes.

use failure::Fail;
use glutin;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to initialize the windowing platform: {}", _0)]
    Platform(String),
    #[fail(display = "Failed to create window: {}", _0)]
    Window(String),
    #[fail(display = "Failed to load OpenGL functions: {}", _0)]
    Loader(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
    #[fail(display = "ERROR::SHADER::{}::COMPILATION_FAILED\n{}", name, log)]
    ShaderCompilation { name: String, log: String },
    #[fail(display = "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{}", log)]
    ProgramLink { log: String },
    #[fail(display = "Trying to create a buffer without data.")]
    EmptyBuffer,
    #[fail(display = "Vertex data of {} floats is not made of 3-component positions.", _0)]
    VertexLayout(usize),
    #[fail(display = "Failed to create shape #{}: {}", index, cause)]
    Shape { index: usize, cause: Box<Error> },
    #[fail(display = "Context lost: {}", _0)]
    ContextLost(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Wraps the failure of the `index`-th shape created during startup.
    pub fn shape(index: usize, cause: Error) -> Self {
        Error::Shape {
            index,
            cause: Box::new(cause),
        }
    }

    /// The negative process exit code that identifies the stage which failed.
    ///
    /// Platform, window and loader failures are `-1`, `-2` and `-3`. The n-th
    /// shape created during startup fails with `-(4 + n)`. Errors raised after
    /// startup, like a lost context, are `-6`.
    pub fn exit_code(&self) -> i32 {
        match *self {
            Error::Platform(_) => -1,
            Error::Window(_) => -2,
            Error::Loader(_) | Error::Requirement(_) => -3,
            Error::Shape { index, .. } => -4 - index as i32,
            Error::ContextLost(_) => -6,
            Error::Backend(_)
            | Error::ShaderCompilation { .. }
            | Error::ProgramLink { .. }
            | Error::EmptyBuffer
            | Error::VertexLayout(_) => -4,
        }
    }
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        match err {
            glutin::CreationError::NoBackendAvailable(..)
            | glutin::CreationError::NotSupported(..)
            | glutin::CreationError::PlatformSpecific(..) => Error::Platform(format!("{}", err)),
            _ => Error::Window(format!("{}", err)),
        }
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::ContextLost(format!("{}", err))
    }
}
