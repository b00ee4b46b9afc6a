//! Canvas-bound wave renderer.
//!
//! Wraps a [`WaveCore`] together with the browser surface it paints into.
//! The host layer drives it: `begin` once on mount, `resize` on viewport
//! changes, `render_frame` once per scheduled frame, `stop` on unmount.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::WaveConfig;
use crate::core::WaveCore;
use crate::noise::Noise3;
use crate::render;

/// Wave renderer bound to one canvas element.
pub struct WaveRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: WaveCore,
}

impl WaveRenderer {
    /// Bind to a canvas element.
    ///
    /// Returns `None` when no 2D context is available (unsupported or
    /// detached surface). Callers skip the animation entirely in that case;
    /// nothing panics and no error propagates.
    #[must_use]
    pub fn attach(canvas: HtmlCanvasElement, config: WaveConfig, noise: Noise3) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx, core: WaveCore::new(config, noise) })
    }

    /// Size the surface to the viewport and start the animation clock.
    pub fn begin(&mut self, width: f64, height: f64) {
        self.apply_surface(width, height);
        self.core.start(width, height);
    }

    /// Track a viewport resize. Resizing the backing store clears the canvas
    /// and resets context state, so the blur filter is reapplied; the clock
    /// keeps running.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.apply_surface(width, height);
        self.core.set_viewport(width, height);
    }

    /// Plan and paint the next frame. Returns `false` once the core has
    /// stopped producing frames, signalling the scheduler loop to end.
    pub fn render_frame(&mut self) -> bool {
        match self.core.tick() {
            Some(frame) => {
                render::draw(&self.ctx, &frame, self.core.width(), self.core.height());
                true
            }
            None => false,
        }
    }

    /// Stop producing frames. Idempotent.
    pub fn stop(&mut self) {
        self.core.stop();
    }

    /// The testable animation state.
    #[must_use]
    pub fn core(&self) -> &WaveCore {
        &self.core
    }

    fn apply_surface(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
        self.ctx.set_filter(&format!("blur({}px)", self.core.config().blur_px));
    }
}
