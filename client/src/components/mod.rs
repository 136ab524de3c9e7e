//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery chrome and read/write shared state from
//! Leptos context providers; the page in `pages` owns orchestration.

pub mod card;
pub mod sort_bar;
pub mod source_section;
pub mod status_bar;
pub mod url_form;
