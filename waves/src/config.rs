//! Wave animation settings.
//!
//! DESIGN
//! ======
//! Configuration is fixed for the lifetime of one mounted renderer. Hosts
//! build a [`WaveConfig`] once (usually from component props folded into
//! [`WaveConfig::default`]) and hand it to the renderer; there is no runtime
//! reconfiguration path, so a remount is the only way to change settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default palette, cycled across wave layers.
pub const DEFAULT_COLORS: [&str; 5] = ["#38bdf8", "#818cf8", "#c084fc", "#e879f9", "#22d3ee"];

/// Animation speed preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speed {
    Slow,
    #[default]
    Fast,
}

impl Speed {
    /// Noise time advanced per frame.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::Slow => 0.001,
            Self::Fast => 0.002,
        }
    }
}

/// Settings for one mounted wave surface.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    /// Stroke colors, one per layer, cycled when shorter than the layer count.
    pub colors: Vec<String>,
    /// Stroke width in CSS pixels.
    pub wave_width: f64,
    /// Background fill painted before the strokes each frame.
    pub background_fill: String,
    /// Blur filter radius applied to the surface, in pixels.
    pub blur_px: f64,
    /// Per-frame clock advance preset.
    pub speed: Speed,
    /// Global alpha for the frame (fill and strokes).
    pub wave_opacity: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            wave_width: 50.0,
            background_fill: "black".to_owned(),
            blur_px: 10.0,
            speed: Speed::Fast,
            wave_opacity: 0.5,
        }
    }
}

impl WaveConfig {
    /// Stroke color for a wave layer. An empty palette falls back to the
    /// default set so layer lookup can never panic.
    #[must_use]
    pub fn layer_color(&self, layer: usize) -> &str {
        if self.colors.is_empty() {
            DEFAULT_COLORS[layer % DEFAULT_COLORS.len()]
        } else {
            &self.colors[layer % self.colors.len()]
        }
    }
}
