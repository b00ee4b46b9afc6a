//! Utility helpers shared across the component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns live here so component bodies stay
//! declarative.

#[cfg(feature = "hydrate")]
pub mod wave_driver;
