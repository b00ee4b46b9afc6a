//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! Pages own composition only and delegate all rendering details to
//! `components`.

pub mod showcase;
