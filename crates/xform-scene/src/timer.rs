//! Frame-rate averaging.

use tracing::info;

/// Number of frames averaged per report.
pub const FPS_WINDOW: usize = 60;

/// Accumulates frame times and reports frames per second once per window.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    samples: Vec<f64>,
    last_fps: Option<f64>,
    frames: u64,
}

impl FrameTimer {
    /// Creates an empty timer.
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(FPS_WINDOW),
            last_fps: None,
            frames: 0,
        }
    }

    /// Records one frame's elapsed time in milliseconds.
    ///
    /// Returns the average fps when this sample completes a window.
    pub fn record(&mut self, elapsed_ms: f64) -> Option<f64> {
        self.frames += 1;
        self.samples.push(elapsed_ms);
        if self.samples.len() < FPS_WINDOW {
            return None;
        }

        let avg = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
        self.samples.clear();
        let fps = if avg > 0.0 { 1000.0 / avg } else { f64::INFINITY };
        info!(frame = self.frames, "{:.1} fps", fps);
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recent report, if a window has completed.
    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Total frames recorded.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
