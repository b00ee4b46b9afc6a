//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are self-contained: each owns its markup and reads shared
//! state only through signals passed in as props.

pub mod hovered_link;
pub mod navbar_menu;
pub mod wavy_background;
