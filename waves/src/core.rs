//! Frame planning: converts the noise clock and viewport size into wave
//! strokes.
//!
//! This module never touches the canvas. It receives a config and a noise
//! field and produces [`Frame`] plans that [`crate::render`] paints, so the
//! whole per-frame computation tests natively without a browser.

#[cfg(test)]
#[path = "core_test.rs"]
mod core_test;

use crate::config::WaveConfig;
use crate::consts::{LAYER_OFFSET, NOISE_X_SCALE, SAMPLE_STEP_PX, WAVE_AMPLITUDE_PX, WAVE_LAYERS};
use crate::noise::Noise3;

/// A path sample in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One stroked wave layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub points: Vec<Point>,
}

/// Everything needed to paint one frame.
///
/// Painting the fill first and the strokes on top is what produces the fade
/// trail: each frame fully supersedes the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub fill: String,
    pub opacity: f64,
    pub strokes: Vec<Stroke>,
}

/// Lifecycle of one mounted wave surface.
///
/// `Stopped` is terminal: a fresh instance is the only way back to
/// `Running`, so a torn-down surface can never resume drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Uninitialized,
    Running,
    Stopped,
}

/// Core animation state: everything that doesn't depend on the canvas
/// element.
pub struct WaveCore {
    config: WaveConfig,
    noise: Noise3,
    nt: f64,
    width: f64,
    height: f64,
    state: RunState,
}

impl WaveCore {
    #[must_use]
    pub fn new(config: WaveConfig, noise: Noise3) -> Self {
        Self {
            config,
            noise,
            nt: 0.0,
            width: 0.0,
            height: 0.0,
            state: RunState::Uninitialized,
        }
    }

    /// Record the initial viewport and start the clock.
    ///
    /// Only meaningful from `Uninitialized`; a stopped core stays stopped.
    pub fn start(&mut self, width: f64, height: f64) {
        if self.state == RunState::Uninitialized {
            self.width = width;
            self.height = height;
            self.state = RunState::Running;
        }
    }

    /// Track a viewport resize. The clock keeps its value: resizing never
    /// restarts the animation.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Stop producing frames. Idempotent.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Advance the clock and plan the next frame.
    ///
    /// Returns `None` unless running; after [`stop`](Self::stop), no frame
    /// is ever produced again and the clock no longer advances.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.state != RunState::Running {
            return None;
        }
        self.nt += self.config.speed.step();

        let strokes = (0..WAVE_LAYERS).map(|layer| self.layer_stroke(layer)).collect();
        Some(Frame {
            fill: self.config.background_fill.clone(),
            opacity: self.config.wave_opacity,
            strokes,
        })
    }

    fn layer_stroke(&self, layer: usize) -> Stroke {
        let phase = LAYER_OFFSET * layer as f64;
        let mid = self.height * 0.5;
        let mut points = Vec::with_capacity((self.width / SAMPLE_STEP_PX) as usize + 1);
        let mut x = 0.0;
        while x < self.width {
            let offset = self.noise.sample(x / NOISE_X_SCALE, phase, self.nt) * WAVE_AMPLITUDE_PX;
            points.push(Point { x, y: offset + mid });
            x += SAMPLE_STEP_PX;
        }
        Stroke {
            color: self.config.layer_color(layer).to_owned(),
            width: self.config.wave_width,
            points,
        }
    }

    // --- Queries ---

    /// Current noise time.
    #[must_use]
    pub fn nt(&self) -> f64 {
        self.nt
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }
}
