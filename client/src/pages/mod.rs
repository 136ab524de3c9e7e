//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The gallery is the only screen; it owns the startup sequence and the
//! socket wiring, and delegates rendering details to `components`.

pub mod gallery;
