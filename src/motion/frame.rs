use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Animation frames are unavailable")]
    Unavailable,
}

/// Something that can run a callback once before the next repaint.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError>;

    /// Requests a frame, falling back to running `callback` right away when no
    /// frame primitive exists.
    fn request_or_run(&self, callback: impl FnOnce() + Clone + 'static)
    where
        Self: Sized,
    {
        if self.request_frame(Box::new(callback.clone())).is_err() {
            log::debug!("no animation frame available, running inline");
            callback();
        }
    }
}

/// Coalesces values offered between two frames into a single delivery.
///
/// The first offer after a delivery asks the caller to schedule a frame; later
/// offers only replace the pending value. `take` hands back the newest value
/// and re-arms the gate.
#[derive(Debug, Clone)]
pub struct FrameGate<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self {
            pending: None,
            scheduled: false,
        }
    }
}

impl<T> FrameGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, returning true when a frame has to be requested.
    pub fn offer(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.scheduled = false;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::{FrameError, FrameScheduler};

    /// Frame clock driven by hand from tests.
    #[derive(Default)]
    pub struct ManualFrames {
        pub(super) queue: RefCell<Vec<Box<dyn FnOnce()>>>,
        pub unavailable: bool,
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Runs every callback requested before this frame.
        pub fn tick(&self) {
            let callbacks = std::mem::take(&mut *self.queue.borrow_mut());
            for cb in callbacks {
                cb();
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError> {
            if self.unavailable {
                return Err(FrameError::Unavailable);
            }
            self.queue.borrow_mut().push(callback);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::testing::ManualFrames;
    use super::*;

    #[test]
    fn test_gate_coalesces_until_taken() {
        let mut gate = FrameGate::new();
        assert!(gate.offer(1));
        assert!(!gate.offer(2));
        assert!(!gate.offer(3));
        assert!(gate.is_scheduled());
        assert_eq!(gate.take(), Some(3));
        assert!(!gate.is_scheduled());
        assert_eq!(gate.take(), None);
        assert!(gate.offer(4));
    }

    #[test]
    fn test_gate_cancel() {
        let mut gate = FrameGate::new();
        gate.offer("a");
        gate.cancel();
        assert_eq!(gate.take(), None);
        assert!(gate.offer("b"));
    }

    #[test]
    fn test_request_or_run_defers_to_frame() {
        let frames = ManualFrames::default();
        let ran = Rc::new(Cell::new(0));
        let counter = ran.clone();
        frames.request_or_run(move || counter.set(counter.get() + 1));
        assert_eq!(ran.get(), 0);
        assert_eq!(frames.pending(), 1);
        frames.tick();
        assert_eq!(ran.get(), 1);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_request_or_run_without_frames_runs_inline() {
        let frames = ManualFrames {
            unavailable: true,
            ..Default::default()
        };
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        frames.request_or_run(move || flag.set(true));
        assert!(ran.get());
        assert_eq!(frames.pending(), 0);
    }
}
