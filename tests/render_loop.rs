extern crate glhello;

use glhello::application::{create_shapes, render_loop};
use glhello::prelude::*;

fn setup(script: Vec<Vec<Event>>) -> (Window, Device, Recorder) {
    let window = Window::headless(HeadlessWindow {
        script,
        ..Default::default()
    })
    .unwrap();

    let (device, recorder) = Device::headless(HeadlessDevice::default()).unwrap();
    (window, device, recorder)
}

fn clears(recorder: &Recorder) -> usize {
    recorder.count(|v| match *v {
        Command::Clear(_) => true,
        _ => false,
    })
}

#[test]
fn frame() {
    let (mut window, device, recorder) = setup(vec![]);

    {
        let shapes = create_shapes(&device).unwrap();
        let frames = render_loop(&mut window, &device, &shapes, Color::teal()).unwrap();
        assert_eq!(frames, 1);

        let frame: Vec<_> = recorder
            .commands()
            .into_iter()
            .filter(|v| v.is_frame())
            .collect();

        assert_eq!(frame.len(), 5);
        assert_eq!(frame[0], Command::Clear(Color::new(0.2, 0.3, 0.3, 1.0)));

        match (&frame[1], &frame[2]) {
            (&Command::UseProgram(Some(_)), &Command::Draw(_, DrawCall::Arrays { count: 3 })) => {}
            v => panic!("unexpected triangle commands {:?}", v),
        }

        match (&frame[3], &frame[4]) {
            (&Command::UseProgram(Some(_)), &Command::Draw(_, DrawCall::Elements { count: 6 })) => {}
            v => panic!("unexpected rectangle commands {:?}", v),
        }
    }

    assert!(window.should_close());
    assert!(recorder.live().is_empty());
}

#[test]
fn escape() {
    let (mut window, device, recorder) = setup(vec![
        vec![],
        vec![Event::pressed(Key::Escape)],
        vec![],
        vec![],
    ]);

    let shapes = create_shapes(&device).unwrap();
    let frames = render_loop(&mut window, &device, &shapes, Color::teal()).unwrap();

    // Escape is seen by the second poll, and the frame of the iteration that
    // reacts to it is still presented.
    assert_eq!(frames, 3);
    assert_eq!(clears(&recorder), 3);
}

#[test]
fn escape_released_in_time() {
    let (mut window, device, _) = setup(vec![
        vec![Event::pressed(Key::Escape), Event::released(Key::Escape)],
        vec![],
    ]);

    let shapes = create_shapes(&device).unwrap();
    let frames = render_loop(&mut window, &device, &shapes, Color::teal()).unwrap();
    assert_eq!(frames, 3);
}

#[test]
fn close_requested() {
    let (mut window, device, _) = setup(vec![vec![], vec![Event::closed()], vec![], vec![]]);

    let shapes = create_shapes(&device).unwrap();
    let frames = render_loop(&mut window, &device, &shapes, Color::teal()).unwrap();
    assert_eq!(frames, 2);
}

#[test]
fn resize() {
    let (mut window, device, recorder) = setup(vec![vec![Event::resized(1024, 768)]]);

    let shapes = create_shapes(&device).unwrap();
    render_loop(&mut window, &device, &shapes, Color::teal()).unwrap();

    assert_eq!(
        recorder.count(|v| *v == Command::SetViewport(Vector2::new(1024, 768))),
        1
    );
    assert_eq!(window.dimensions(), Vector2::new(1024, 768));
}

#[test]
fn no_shapes() {
    let (mut window, device, recorder) = setup(vec![vec![], vec![]]);

    let frames = render_loop(&mut window, &device, &[], Color::new(0.0, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(frames, 3);
    assert_eq!(recorder.commands().len(), 3);
}

#[test]
fn context_lost() {
    let window = Window::headless(HeadlessWindow {
        script: vec![vec![]; 8],
        fault: Some(WindowFault::SwapBuffers(2)),
        ..Default::default()
    });

    let mut window = window.unwrap();
    let (device, recorder) = Device::headless(HeadlessDevice::default()).unwrap();
    let shapes = create_shapes(&device).unwrap();

    match render_loop(&mut window, &device, &shapes, Color::teal()) {
        Err(err @ Error::ContextLost(_)) => assert_eq!(err.exit_code(), -6),
        v => panic!("unexpected {:?}", v),
    }

    assert_eq!(clears(&recorder), 3);
}
