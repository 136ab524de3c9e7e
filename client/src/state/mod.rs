//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `cards` owns the card list and the group/sort pipeline, `ui` owns
//! connection and notice state.

pub mod cards;
pub mod ui;
