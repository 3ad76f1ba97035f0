extern crate glhello;

use glhello::prelude::*;
use glhello::scene::{TRIANGLE_FS, TRIANGLE_VS};

fn device() -> (Device, Recorder) {
    Device::headless(HeadlessDevice::default()).unwrap()
}

fn faulty(fault: DeviceFault) -> (Device, Recorder) {
    Device::headless(HeadlessDevice { fault: Some(fault) }).unwrap()
}

#[test]
fn buffer() {
    let (device, recorder) = device();

    {
        let vbo = VertexBuffer::new(&device, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(vbo.len(), 3);
        assert_eq!(
            recorder.commands(),
            vec![Command::CreateBuffer(vbo.id(), BufferTarget::Vertex, 12)]
        );

        let ibo = ElementBuffer::new(&device, &[0, 1, 2, 2, 1, 0]).unwrap();
        assert_eq!(ibo.len(), 6);
        assert_eq!(
            recorder.commands().last(),
            Some(&Command::CreateBuffer(ibo.id(), BufferTarget::Index, 24))
        );

        assert_eq!(recorder.live().len(), 2);
    }

    assert!(recorder.live().is_empty());
    assert!(recorder.double_deletes().is_empty());
    assert_eq!(recorder.count(|v| matches_delete_buffer(v)), 2);
}

fn matches_delete_buffer(v: &Command) -> bool {
    match *v {
        Command::DeleteBuffer(_) => true,
        _ => false,
    }
}

#[test]
fn empty_buffer() {
    let (device, recorder) = device();

    match VertexBuffer::new(&device, &[]) {
        Err(Error::EmptyBuffer) => {}
        _ => panic!("empty buffers must be rejected."),
    }

    assert_eq!(recorder.created(), 0);
}

#[test]
fn vertex_array() {
    let (device, recorder) = device();

    let vao = VertexArray::new(&device, &[-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0])
        .unwrap();
    assert_eq!(vao.draw_call(), DrawCall::Arrays { count: 3 });

    let commands = recorder.commands();
    assert_eq!(commands.len(), 2);
    match commands[1] {
        Command::CreateVertexArray(id, _, None) => assert_eq!(id, vao.id()),
        ref v => panic!("unexpected {:?}", v),
    }

    vao.draw();
    assert_eq!(
        recorder.commands().last(),
        Some(&Command::Draw(vao.id(), DrawCall::Arrays { count: 3 }))
    );

    let id = vao.id();
    drop(vao);

    // The vertex array goes before the buffer it describes.
    let commands = recorder.commands();
    assert_eq!(commands[commands.len() - 2], Command::DeleteVertexArray(id));
    match commands[commands.len() - 1] {
        Command::DeleteBuffer(_) => {}
        ref v => panic!("unexpected {:?}", v),
    }

    assert!(recorder.live().is_empty());
}

#[test]
fn indexed_vertex_array() {
    let (device, recorder) = device();

    let vertices = [0.5, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0, -0.5, 0.5, 0.0];
    let vao = VertexArray::indexed(&device, &vertices, &[0, 1, 3, 1, 2, 3]).unwrap();
    assert_eq!(vao.draw_call(), DrawCall::Elements { count: 6 });

    match recorder.commands()[2] {
        Command::CreateVertexArray(id, _, Some(_)) => assert_eq!(id, vao.id()),
        ref v => panic!("unexpected {:?}", v),
    }

    drop(vao);
    assert!(recorder.live().is_empty());
    assert!(recorder.double_deletes().is_empty());
}

#[test]
fn vertex_layout() {
    let (device, recorder) = device();

    match VertexArray::new(&device, &[0.0, 1.0, 2.0, 3.0]) {
        Err(Error::VertexLayout(4)) => {}
        _ => panic!("positions are made of 3 floats."),
    }

    assert_eq!(recorder.created(), 0);
}

#[test]
fn shader() {
    let (device, recorder) = device();

    let vs = Shader::compile(&device, "triangle_vertex", ShaderStage::Vertex, TRIANGLE_VS).unwrap();
    assert!(vs.is_compiled());
    assert_eq!(vs.name(), "triangle_vertex");
    assert_eq!(vs.stage(), ShaderStage::Vertex);

    drop(vs);
    assert!(recorder.live().is_empty());
}

#[test]
fn shader_compilation_failure() {
    let (device, recorder) = device();

    match Shader::compile(&device, "broken", ShaderStage::Fragment, "#version 330 core\n") {
        Err(Error::ShaderCompilation { ref name, ref log }) => {
            assert_eq!(name, "broken");
            assert!(!log.is_empty());
        }
        _ => panic!("source without an entry point must not compile."),
    }

    assert_eq!(recorder.created(), 1);
    assert!(recorder.live().is_empty());
}

#[test]
fn program() {
    let (device, recorder) = device();

    let program = {
        let vs = Shader::compile(&device, "vs", ShaderStage::Vertex, TRIANGLE_VS).unwrap();
        let fs = Shader::compile(&device, "fs", ShaderStage::Fragment, TRIANGLE_FS).unwrap();
        let program = Program::link(&device, &[&vs, &fs]).unwrap();

        assert_eq!(
            recorder.count(|v| match *v {
                Command::DetachShader(p, _) => p == program.id(),
                _ => false,
            }),
            2
        );

        program
    };

    assert!(program.check());
    assert_eq!(recorder.live(), vec![Object::Program(program.id())]);

    program.bind();
    assert_eq!(
        recorder.commands().last(),
        Some(&Command::UseProgram(Some(program.id())))
    );

    drop(program);
    assert!(recorder.live().is_empty());
    assert!(recorder.double_deletes().is_empty());
}

#[test]
fn program_link_failure() {
    let (device, recorder) = device();

    let vs = Shader::compile(&device, "vs", ShaderStage::Vertex, TRIANGLE_VS).unwrap();
    match Program::link(&device, &[&vs]) {
        Err(Error::ProgramLink { ref log }) => assert!(!log.is_empty()),
        _ => panic!("a program without fragment stage must not link."),
    }

    assert_eq!(recorder.live(), vec![Object::Shader(vs.id())]);
}

#[test]
fn injected_link_failure() {
    let (device, recorder) = faulty(DeviceFault::Link(0));

    let vs = Shader::compile(&device, "vs", ShaderStage::Vertex, TRIANGLE_VS).unwrap();
    let fs = Shader::compile(&device, "fs", ShaderStage::Fragment, TRIANGLE_FS).unwrap();
    assert!(Program::link(&device, &[&vs, &fs]).is_err());
    assert!(Program::link(&device, &[&vs, &fs]).is_ok());

    drop(vs);
    drop(fs);
    assert!(recorder.live().is_empty());
}

#[test]
fn shapes() {
    let (device, recorder) = device();

    {
        let triangle = Shape::triangle(&device).unwrap();
        assert_eq!(triangle.name(), "triangle");

        // vbo, vao, two shaders and a program were created; the shaders are
        // gone once the program is linked.
        assert_eq!(recorder.created(), 5);
        assert_eq!(recorder.live().len(), 3);

        let rectangle = Shape::rectangle(&device).unwrap();
        assert_eq!(rectangle.name(), "rectangle");
        assert_eq!(recorder.created(), 11);
        assert_eq!(recorder.live().len(), 7);
    }

    assert!(recorder.live().is_empty());
    assert!(recorder.double_deletes().is_empty());
}

#[test]
fn shape_failure_releases_geometry() {
    let (device, recorder) = faulty(DeviceFault::Compile(1));

    match Shape::triangle(&device) {
        Err(Error::ShaderCompilation { ref name, .. }) => assert_eq!(name, "triangle_fragment"),
        _ => panic!("the fragment stage was told to fail."),
    }

    assert!(recorder.live().is_empty());
    assert_eq!(recorder.count(|v| v.is_frame()), 0);
}
