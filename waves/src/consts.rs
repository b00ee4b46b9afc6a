//! Shared numeric constants for the wave engine.

// ── Geometry ────────────────────────────────────────────────────

/// Wave strokes drawn per frame.
pub const WAVE_LAYERS: usize = 5;

/// Horizontal distance between path samples, in CSS pixels.
pub const SAMPLE_STEP_PX: f64 = 5.0;

/// Peak vertical excursion of a wave from the midline, in pixels.
pub const WAVE_AMPLITUDE_PX: f64 = 100.0;

// ── Noise-space mapping ─────────────────────────────────────────

/// Pixels per unit of noise-space along x.
pub const NOISE_X_SCALE: f64 = 800.0;

/// Noise-space offset between adjacent wave layers.
pub const LAYER_OFFSET: f64 = 0.3;
