//! Frame loop run control
//!
//! The frame pipeline asks its [`RunControl`] before every iteration
//! whether to continue. Production firmware never stops; tests and host
//! tools bound the loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Decides whether the frame loop runs another iteration
pub trait RunControl {
    /// Called before each frame with the number of frames already sent
    fn keep_running(&mut self, frames: u32) -> bool;
}

/// Run until power-off
#[derive(Debug, Clone, Copy, Default)]
pub struct Forever;

impl RunControl for Forever {
    fn keep_running(&mut self, _frames: u32) -> bool {
        true
    }
}

/// Stop after a fixed number of frames
#[derive(Debug, Clone, Copy)]
pub struct FrameLimit(pub u32);

impl RunControl for FrameLimit {
    fn keep_running(&mut self, frames: u32) -> bool {
        frames < self.0
    }
}

/// Stop once a shared flag is raised
#[derive(Debug, Clone, Copy)]
pub struct CancelFlag<'a>(pub &'a AtomicBool);

impl RunControl for CancelFlag<'_> {
    fn keep_running(&mut self, _frames: u32) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl<F: FnMut(u32) -> bool> RunControl for F {
    fn keep_running(&mut self, frames: u32) -> bool {
        self(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_limit() {
        let mut limit = FrameLimit(2);
        assert!(limit.keep_running(0));
        assert!(limit.keep_running(1));
        assert!(!limit.keep_running(2));
        assert!(!FrameLimit(0).keep_running(0));
    }

    #[test]
    fn test_cancel_flag() {
        let flag = AtomicBool::new(false);
        let mut control = CancelFlag(&flag);
        assert!(control.keep_running(100));
        flag.store(true, Ordering::Relaxed);
        assert!(!control.keep_running(101));
    }

    #[test]
    fn test_closure() {
        let mut seen = 0;
        let mut control = |frames: u32| {
            seen = frames;
            frames < 3
        };
        assert!(control.keep_running(2));
        assert!(!control.keep_running(3));
        assert_eq!(seen, 3);
        assert!(Forever.keep_running(u32::MAX));
    }
}
