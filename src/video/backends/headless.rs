//! A GPU backend without a GPU.
//!
//! Every call is appended to a shared [`Recorder`], and the set of live
//! objects is tracked so that leaks and double deletions show up in tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};

use super::{BufferTarget, ContextInfo, DrawCall, RawId, ShaderStage, VertexAttribute, Visitor};

/// Which step a headless device should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFault {
    /// Refuses to load the function pointers.
    Loader,
    /// Fails the n-th shader compilation, counting from zero.
    Compile(usize),
    /// Fails the n-th program link, counting from zero.
    Link(usize),
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessParams {
    pub fault: Option<DeviceFault>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Buffer(RawId),
    VertexArray(RawId),
    Shader(RawId),
    Program(RawId),
}

/// The calls a headless device has received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateBuffer(RawId, BufferTarget, usize),
    DeleteBuffer(RawId),
    CreateVertexArray(RawId, RawId, Option<RawId>),
    DeleteVertexArray(RawId),
    CreateShader(RawId, ShaderStage),
    CompileShader(RawId),
    DeleteShader(RawId),
    CreateProgram(RawId),
    AttachShader(RawId, RawId),
    DetachShader(RawId, RawId),
    LinkProgram(RawId),
    DeleteProgram(RawId),
    UseProgram(Option<RawId>),
    Draw(RawId, DrawCall),
    Clear(Color),
    SetViewport(Vector2<u32>),
}

impl Command {
    /// Returns true for the commands that make up a frame.
    pub fn is_frame(&self) -> bool {
        match *self {
            Command::UseProgram(_) | Command::Draw(..) | Command::Clear(_) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
struct Journal {
    commands: Vec<Command>,
    live: HashSet<Object>,
    created: usize,
    double_deletes: Vec<Object>,
}

/// A cheap handle to the journal of a headless device. It stays readable
/// after the device has been dropped.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Journal>>);

impl Recorder {
    /// All commands received so far.
    pub fn commands(&self) -> Vec<Command> {
        self.0.borrow().commands.clone()
    }

    /// Number of objects created so far, live or not.
    pub fn created(&self) -> usize {
        self.0.borrow().created
    }

    /// Objects that have been created but not deleted yet.
    pub fn live(&self) -> Vec<Object> {
        self.0.borrow().live.iter().cloned().collect()
    }

    /// Objects that had a delete call issued while not alive.
    pub fn double_deletes(&self) -> Vec<Object> {
        self.0.borrow().double_deletes.clone()
    }

    pub fn count<F>(&self, filter: F) -> usize
    where
        F: Fn(&Command) -> bool,
    {
        self.0.borrow().commands.iter().filter(|v| filter(v)).count()
    }

    fn push(&self, command: Command) {
        self.0.borrow_mut().commands.push(command);
    }

    fn create(&self, object: Object, command: Command) {
        let mut journal = self.0.borrow_mut();
        journal.created += 1;
        journal.live.insert(object);
        journal.commands.push(command);
    }

    fn delete(&self, object: Object, command: Command) {
        let mut journal = self.0.borrow_mut();
        if !journal.live.remove(&object) {
            journal.double_deletes.push(object);
        }

        journal.commands.push(command);
    }
}

#[derive(Debug, Clone, Default)]
struct ShaderState {
    stage: Option<ShaderStage>,
    compiled: bool,
}

#[derive(Debug, Clone, Default)]
struct ProgramState {
    attached: Vec<RawId>,
    linked: bool,
}

pub struct HeadlessVisitor {
    recorder: Recorder,
    fault: Option<DeviceFault>,
    next: Cell<RawId>,
    compiles: Cell<usize>,
    links: Cell<usize>,
    shaders: RefCell<HashMap<RawId, ShaderState>>,
    programs: RefCell<HashMap<RawId, ProgramState>>,
}

impl HeadlessVisitor {
    pub fn new(params: HeadlessParams, recorder: Recorder) -> Result<Self> {
        if params.fault == Some(DeviceFault::Loader) {
            return Err(Error::Loader("headless device refused to load.".into()));
        }

        Ok(HeadlessVisitor {
            recorder,
            fault: params.fault,
            next: Cell::new(1),
            compiles: Cell::new(0),
            links: Cell::new(0),
            shaders: RefCell::new(HashMap::new()),
            programs: RefCell::new(HashMap::new()),
        })
    }

    fn alloc(&self) -> RawId {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

impl Visitor for HeadlessVisitor {
    fn info(&self) -> ContextInfo {
        ContextInfo {
            version: "3.3 (Core Profile) Headless".into(),
            vendor: "glhello".into(),
            renderer: "headless".into(),
        }
    }

    unsafe fn create_buffer(&self, target: BufferTarget, bytes: &[u8]) -> Result<RawId> {
        let id = self.alloc();
        self.recorder.create(
            Object::Buffer(id),
            Command::CreateBuffer(id, target, bytes.len()),
        );
        Ok(id)
    }

    unsafe fn delete_buffer(&self, id: RawId) {
        self.recorder
            .delete(Object::Buffer(id), Command::DeleteBuffer(id));
    }

    unsafe fn create_vertex_array(
        &self,
        vbo: RawId,
        ibo: Option<RawId>,
        _: VertexAttribute,
    ) -> Result<RawId> {
        let id = self.alloc();
        self.recorder.create(
            Object::VertexArray(id),
            Command::CreateVertexArray(id, vbo, ibo),
        );
        Ok(id)
    }

    unsafe fn delete_vertex_array(&self, id: RawId) {
        self.recorder
            .delete(Object::VertexArray(id), Command::DeleteVertexArray(id));
    }

    unsafe fn create_shader(&self, stage: ShaderStage) -> Result<RawId> {
        let id = self.alloc();
        let state = ShaderState {
            stage: Some(stage),
            compiled: false,
        };

        self.shaders.borrow_mut().insert(id, state);
        self.recorder
            .create(Object::Shader(id), Command::CreateShader(id, stage));
        Ok(id)
    }

    unsafe fn compile_shader(&self, id: RawId, source: &str) -> Result<()> {
        let nth = self.compiles.get();
        self.compiles.set(nth + 1);

        let compiled = self.fault != Some(DeviceFault::Compile(nth)) && source.contains("main");
        if let Some(state) = self.shaders.borrow_mut().get_mut(&id) {
            state.compiled = compiled;
        }

        self.recorder.push(Command::CompileShader(id));
        Ok(())
    }

    unsafe fn shader_compiled(&self, id: RawId) -> bool {
        self.shaders
            .borrow()
            .get(&id)
            .map(|v| v.compiled)
            .unwrap_or(false)
    }

    unsafe fn shader_info_log(&self, id: RawId) -> String {
        if self.shader_compiled(id) {
            String::new()
        } else {
            "0:1(1): error: headless compilation failed".into()
        }
    }

    unsafe fn delete_shader(&self, id: RawId) {
        self.shaders.borrow_mut().remove(&id);
        self.recorder
            .delete(Object::Shader(id), Command::DeleteShader(id));
    }

    unsafe fn create_program(&self) -> Result<RawId> {
        let id = self.alloc();
        self.programs
            .borrow_mut()
            .insert(id, ProgramState::default());
        self.recorder
            .create(Object::Program(id), Command::CreateProgram(id));
        Ok(id)
    }

    unsafe fn attach_shader(&self, program: RawId, shader: RawId) {
        if let Some(state) = self.programs.borrow_mut().get_mut(&program) {
            state.attached.push(shader);
        }

        self.recorder.push(Command::AttachShader(program, shader));
    }

    unsafe fn detach_shader(&self, program: RawId, shader: RawId) {
        if let Some(state) = self.programs.borrow_mut().get_mut(&program) {
            state.attached.retain(|v| *v != shader);
        }

        self.recorder.push(Command::DetachShader(program, shader));
    }

    unsafe fn link_program(&self, id: RawId) {
        let nth = self.links.get();
        self.links.set(nth + 1);

        let shaders = self.shaders.borrow();
        if let Some(state) = self.programs.borrow_mut().get_mut(&id) {
            let stages: Vec<_> = state
                .attached
                .iter()
                .filter_map(|v| shaders.get(v))
                .filter(|v| v.compiled)
                .filter_map(|v| v.stage)
                .collect();

            state.linked = self.fault != Some(DeviceFault::Link(nth))
                && stages.contains(&ShaderStage::Vertex)
                && stages.contains(&ShaderStage::Fragment);
        }

        self.recorder.push(Command::LinkProgram(id));
    }

    unsafe fn program_linked(&self, id: RawId) -> bool {
        self.programs
            .borrow()
            .get(&id)
            .map(|v| v.linked)
            .unwrap_or(false)
    }

    unsafe fn program_info_log(&self, id: RawId) -> String {
        if self.program_linked(id) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".into()
        }
    }

    unsafe fn delete_program(&self, id: RawId) {
        self.programs.borrow_mut().remove(&id);
        self.recorder
            .delete(Object::Program(id), Command::DeleteProgram(id));
    }

    unsafe fn use_program(&self, id: Option<RawId>) {
        self.recorder.push(Command::UseProgram(id));
    }

    unsafe fn draw(&self, vao: RawId, call: DrawCall) {
        self.recorder.push(Command::Draw(vao, call));
    }

    unsafe fn clear(&self, color: Color) {
        self.recorder.push(Command::Clear(color));
    }

    unsafe fn set_viewport(&self, dimensions: Vector2<u32>) {
        self.recorder.push(Command::SetViewport(dimensions));
    }
}
