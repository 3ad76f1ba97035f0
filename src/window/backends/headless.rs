use std::cell::Cell;
use std::collections::VecDeque;
use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// Which bootstrap stage a headless window should refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFault {
    Platform,
    Window,
    /// Fails `swap_buffers` on the given frame, counting from zero.
    SwapBuffers(usize),
}

/// Drives a window without a display.
///
/// Each call to `poll_events` hands out the next batch of `script`. Once the
/// script is exhausted the window reports `Closed`, so a render loop over a
/// headless window always terminates.
#[derive(Debug, Clone)]
pub struct HeadlessParams {
    pub dimensions: Vector2<u32>,
    pub script: Vec<Vec<Event>>,
    pub fault: Option<WindowFault>,
}

impl Default for HeadlessParams {
    fn default() -> Self {
        HeadlessParams {
            dimensions: Vector2::new(800, 600),
            script: Vec::new(),
            fault: None,
        }
    }
}

impl HeadlessParams {
    /// Runs `frames` frames without any input, then closes.
    pub fn frames(frames: usize) -> Self {
        HeadlessParams {
            script: vec![Vec::new(); frames.saturating_sub(1)],
            ..Default::default()
        }
    }
}

pub struct HeadlessVisitor {
    dimensions: Cell<Vector2<u32>>,
    script: VecDeque<Vec<Event>>,
    swaps: Cell<usize>,
    fault: Option<WindowFault>,
}

impl HeadlessVisitor {
    pub fn new(params: HeadlessParams) -> Result<Self> {
        match params.fault {
            Some(WindowFault::Platform) => {
                return Err(Error::Platform("no headless platform available.".into()));
            }
            Some(WindowFault::Window) => {
                return Err(Error::Window("headless surface refused.".into()));
            }
            _ => {}
        }

        Ok(HeadlessVisitor {
            dimensions: Cell::new(params.dimensions),
            script: params.script.into_iter().collect(),
            swaps: Cell::new(0),
            fault: params.fault,
        })
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions.get()
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        self.dimensions.set(dimensions);
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.script.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(Event::Window(WindowEvent::Closed)),
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    fn swap_buffers(&self) -> Result<()> {
        let frame = self.swaps.get();
        self.swaps.set(frame + 1);

        if self.fault == Some(WindowFault::SwapBuffers(frame)) {
            return Err(Error::ContextLost("headless surface lost.".into()));
        }

        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, _: &str) -> *const c_void {
        std::ptr::null()
    }
}
