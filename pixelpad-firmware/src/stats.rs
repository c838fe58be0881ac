//! Frame rate reporting

use defmt::info;
use embassy_time::Instant;
use pixelpad_core::run::RunControl;

/// Frames between two reports
const REPORT_INTERVAL: u32 = 64;

/// Run control that never stops and logs the frame rate periodically
pub struct FrameStats {
    window_start: Instant,
    window_frames: u32,
}

impl FrameStats {
    /// Start measuring from now
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            window_frames: 0,
        }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunControl for FrameStats {
    fn keep_running(&mut self, frames: u32) -> bool {
        self.window_frames += 1;
        if self.window_frames > REPORT_INTERVAL {
            let elapsed = self.window_start.elapsed().as_millis().max(1);
            let fps_x10 = u64::from(REPORT_INTERVAL) * 10_000 / elapsed;
            info!(
                "frame {}: {}.{} fps",
                frames,
                fps_x10 / 10,
                fps_x10 % 10
            );
            self.window_start = Instant::now();
            self.window_frames = 1;
        }
        true
    }
}
