extern crate glhello;

use glhello::prelude::*;

fn headless(window: HeadlessWindow, device: HeadlessDevice) -> (Settings, Recorder) {
    let recorder = Recorder::default();
    let settings = Settings {
        headless: Some(Headless {
            window,
            device,
            recorder: recorder.clone(),
        }),
        ..Default::default()
    };

    (settings, recorder)
}

fn window_fault(fault: WindowFault) -> (Settings, Recorder) {
    let window = HeadlessWindow {
        fault: Some(fault),
        ..Default::default()
    };

    headless(window, HeadlessDevice::default())
}

fn device_fault(fault: DeviceFault) -> (Settings, Recorder) {
    let device = HeadlessDevice { fault: Some(fault) };
    headless(HeadlessWindow::frames(4), device)
}

/// Runs a startup that must fail, and checks that no frame was issued.
fn exit_code((settings, recorder): (Settings, Recorder)) -> i32 {
    let code = match run(settings) {
        Ok(_) => 0,
        Err(err) => err.exit_code(),
    };

    assert_eq!(recorder.count(Command::is_frame), 0);
    assert!(recorder.live().is_empty());
    code
}

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.window.title, "LearnOpenGL");
    assert_eq!(settings.window.size, Vector2::new(800, 600));
    assert_eq!(settings.window.gl_version, (3, 3));
    assert_eq!(settings.clear_color, Color::new(0.2, 0.3, 0.3, 1.0));
    assert!(settings.headless.is_none());
}

#[test]
fn clean_shutdown() {
    let (settings, recorder) = headless(HeadlessWindow::frames(4), HeadlessDevice::default());
    assert_eq!(run(settings).unwrap(), 4);

    let commands = recorder.commands();
    let first_frame = commands.iter().position(Command::is_frame).unwrap();
    let viewport = Command::SetViewport(Vector2::new(800, 600));
    assert_eq!(commands.iter().position(|v| *v == viewport), Some(0));
    assert!(0 < first_frame);

    assert_eq!(recorder.count(|v| *v == Command::Clear(Color::teal())), 4);
    assert!(recorder.live().is_empty());
    assert!(recorder.double_deletes().is_empty());
}

#[test]
fn escape_shutdown() {
    let window = HeadlessWindow {
        script: vec![vec![Event::pressed(Key::Escape)]; 16],
        ..Default::default()
    };

    let (settings, _) = headless(window, HeadlessDevice::default());
    assert_eq!(run(settings).unwrap(), 2);
}

#[test]
fn platform_failure() {
    assert_eq!(exit_code(window_fault(WindowFault::Platform)), -1);
}

#[test]
fn window_failure() {
    assert_eq!(exit_code(window_fault(WindowFault::Window)), -2);
}

#[test]
fn loader_failure() {
    assert_eq!(exit_code(device_fault(DeviceFault::Loader)), -3);
}

#[test]
fn triangle_failure() {
    assert_eq!(exit_code(device_fault(DeviceFault::Compile(0))), -4);
    assert_eq!(exit_code(device_fault(DeviceFault::Compile(1))), -4);
    assert_eq!(exit_code(device_fault(DeviceFault::Link(0))), -4);
}

#[test]
fn rectangle_failure() {
    assert_eq!(exit_code(device_fault(DeviceFault::Compile(2))), -5);
    assert_eq!(exit_code(device_fault(DeviceFault::Compile(3))), -5);
    assert_eq!(exit_code(device_fault(DeviceFault::Link(1))), -5);
}

#[test]
fn shape_failure_is_identified() {
    let (settings, recorder) = device_fault(DeviceFault::Link(1));
    match run(settings) {
        Err(Error::Shape { index, ref cause }) => {
            assert_eq!(index, 1);
            match **cause {
                Error::ProgramLink { .. } => {}
                ref v => panic!("unexpected cause {:?}", v),
            }
        }
        v => panic!("unexpected {:?}", v),
    }

    assert_eq!(recorder.count(Command::is_frame), 0);
}

#[test]
fn shape_failure_diagnostic() {
    let (settings, _) = device_fault(DeviceFault::Compile(0));
    let err = run(settings).unwrap_err();

    let msg = format!("{}", err);
    assert!(msg.starts_with("Failed to create shape #0: "));
    assert!(msg.contains("ERROR::SHADER::triangle_vertex::COMPILATION_FAILED"));
}
