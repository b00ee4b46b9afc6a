//! Browser-side animation driver for the wavy background.
//!
//! DESIGN
//! ======
//! Components hand a canvas and a [`WaveConfig`] to [`start`] and get back a
//! [`WaveHandle`]. The handle is the single teardown point: `stop()` halts
//! the frame core, cancels the pending animation frame, and removes the
//! resize listener, so nothing fires after the component unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use waves::config::WaveConfig;
use waves::noise::Noise3;
use waves::renderer::WaveRenderer;

type RafClosure = Closure<dyn FnMut(f64)>;

/// Teardown handle for one running wave animation.
pub struct WaveHandle {
    renderer: Rc<RefCell<WaveRenderer>>,
    raf_id: Rc<Cell<Option<i32>>>,
    raf_closure: Rc<RefCell<Option<RafClosure>>>,
    resize_closure: Option<Closure<dyn FnMut()>>,
}

impl WaveHandle {
    /// Stop the animation. After this returns no frame callback or resize
    /// handler runs again; calling it more than once is harmless.
    pub fn stop(mut self) {
        self.renderer.borrow_mut().stop();

        let window = web_sys::window();
        if let Some(id) = self.raf_id.take()
            && let Some(window) = window.as_ref()
        {
            let _ = window.cancel_animation_frame(id);
        }
        self.raf_closure.borrow_mut().take();

        if let Some(closure) = self.resize_closure.take()
            && let Some(window) = window.as_ref()
        {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

/// Bind a canvas to the wave renderer and start the frame loop.
///
/// Returns `None` when there is no window or no 2D context; the caller
/// simply renders without the animated background.
pub fn start(canvas: &web_sys::HtmlCanvasElement, config: WaveConfig) -> Option<WaveHandle> {
    let window = web_sys::window()?;
    let Some(mut renderer) = WaveRenderer::attach(canvas.clone(), config, Noise3::default()) else {
        log::warn!("wavy background: no 2d context available, skipping animation");
        return None;
    };

    let (width, height) = viewport_size(&window);
    renderer.begin(width, height);
    let renderer = Rc::new(RefCell::new(renderer));

    // Keep the surface matched to the viewport. Registered additively so it
    // composes with any other resize listeners on the page.
    let resize_closure = {
        let renderer = Rc::clone(&renderer);
        Closure::wrap(Box::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            renderer.borrow_mut().resize(width, height);
        }) as Box<dyn FnMut()>)
    };
    if window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("wavy background: resize listener registration failed");
    }

    let raf_id = Rc::new(Cell::new(None::<i32>));
    let raf_closure: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    {
        let renderer = Rc::clone(&renderer);
        let raf_id = Rc::clone(&raf_id);
        let raf_closure_inner = Rc::clone(&raf_closure);
        *raf_closure.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if !renderer.borrow_mut().render_frame() {
                return;
            }
            schedule(&raf_id, &raf_closure_inner);
        }) as Box<dyn FnMut(f64)>));
    }
    schedule(&raf_id, &raf_closure);

    log::debug!("wavy background: animation started at {width}x{height}");
    Some(WaveHandle {
        renderer,
        raf_id,
        raf_closure,
        resize_closure: Some(resize_closure),
    })
}

fn schedule(raf_id: &Rc<Cell<Option<i32>>>, raf_closure: &Rc<RefCell<Option<RafClosure>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = raf_closure.borrow().as_ref()
        && let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref())
    {
        raf_id.set(Some(id));
    }
}

fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
