//! Animated wavy canvas background.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges Leptos mount/unmount to the imperative `waves` renderer. On
//! hydration it binds the canvas, starts the frame loop, and tracks viewport
//! resizes; unmount tears the loop and the listener down through one handle.
//! Without a usable 2D context the children still render; only the
//! animation is skipped.

use leptos::prelude::*;
use waves::config::{Speed, WaveConfig};

#[cfg(feature = "hydrate")]
use crate::util::wave_driver::{self, WaveHandle};

/// Full-viewport animated wave backdrop with content overlaid on top.
///
/// Every knob is optional; absent props fall back to
/// [`WaveConfig::default`] (five-color palette, 50px strokes, black fill,
/// 10px blur, fast speed, 0.5 opacity).
#[component]
pub fn WavyBackground(
    #[prop(optional)] colors: Option<Vec<String>>,
    #[prop(optional)] wave_width: Option<f64>,
    #[prop(optional)] background_fill: Option<String>,
    #[prop(optional)] blur: Option<f64>,
    #[prop(optional)] speed: Option<Speed>,
    #[prop(optional)] wave_opacity: Option<f64>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] container_class: String,
    children: Children,
) -> impl IntoView {
    let mut config = WaveConfig::default();
    if let Some(colors) = colors {
        config.colors = colors;
    }
    if let Some(width) = wave_width {
        config.wave_width = width;
    }
    if let Some(fill) = background_fill {
        config.background_fill = fill;
    }
    if let Some(blur) = blur {
        config.blur_px = blur;
    }
    if let Some(speed) = speed {
        config.speed = speed;
    }
    if let Some(opacity) = wave_opacity {
        config.wave_opacity = opacity;
    }

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let driver = StoredValue::new_local(None::<WaveHandle>);
        let canvas_ref = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if driver.with_value(Option::is_some) {
                return;
            }
            driver.set_value(wave_driver::start(&canvas, config.clone()));
        });
        on_cleanup(move || {
            if let Some(handle) = driver.try_update_value(Option::take).flatten() {
                handle.stop();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let container_class = if container_class.is_empty() {
        "wavy-background".to_owned()
    } else {
        format!("wavy-background {container_class}")
    };
    let content_class = if class.is_empty() {
        "wavy-background__content".to_owned()
    } else {
        format!("wavy-background__content {class}")
    };

    view! {
        <div class=container_class>
            <canvas class="wavy-background__canvas" node_ref=canvas_ref aria-hidden="true"></canvas>
            <div class=content_class>{children()}</div>
        </div>
    }
}
