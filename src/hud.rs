use crate::prelude::*;

use std::collections::VecDeque;

const FRAME_HISTORY: usize = 10;

/// Frame times of the most recent frames, in milliseconds.
#[derive(Debug, Default)]
pub struct FrameTimes {
    recent: VecDeque<f64>,
}

impl FrameTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, delta_time: f64) {
        if self.recent.len() == FRAME_HISTORY {
            self.recent.pop_front();
        }
        self.recent.push_back(delta_time * 1000.0);
    }

    /// Average time of the recorded frames, 0 if nothing was recorded yet.
    pub fn milliseconds_per_frame(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    pub fn fps(&self) -> f64 {
        let ms = self.milliseconds_per_frame();
        if ms <= 0.0 {
            0.0
        } else {
            1000.0 / ms
        }
    }
}

/// Dracula palette.
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub red: Color,
    pub yellow: Color,
    pub mole: Color,
}

impl Theme {
    pub fn dracula() -> Self {
        Self {
            background: Rgba::try_from("#282A36").unwrap(),
            foreground: Rgba::try_from("#F8F8F2").unwrap(),
            red: Rgba::try_from("#FF5555").unwrap(),
            yellow: Rgba::try_from("#F1FA8C").unwrap(),
            mole: Rgba::try_from("#BD93F9").unwrap(),
        }
    }

    /// Red below half the target rate, yellow below the target.
    pub fn fps_color(&self, fps: f64, max_fps: f64) -> Color {
        if fps < max_fps / 2.0 {
            self.red
        } else if fps.floor() < max_fps {
            self.yellow
        } else {
            self.foreground
        }
    }
}
