//! Decorative UI components: a hover-styled link, a dropdown navbar menu,
//! and an animated wavy canvas background.
//!
//! The components are plain Leptos building blocks a host app composes into
//! its pages. Browser-only behavior (the canvas frame loop, resize tracking)
//! is gated behind the `hydrate` feature so the crate compiles and tests on
//! native targets with no features enabled.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | The public component set |
//! | [`state`] | Trivial UI state (which menu item is open) |
//! | [`util`] | Browser glue: the wave animation driver |
//! | [`pages`] | Showcase page composing every component |

pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Install the browser logging and panic hooks. Host apps call this once
/// during hydration, before mounting any components.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
