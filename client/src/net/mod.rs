//! Networking modules for HTTP + the websocket envelope protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the one-shot REST fetch at startup; `socket` owns the
//! websocket lifecycle and the pub/sub event dispatch everything else
//! hangs off.

pub mod api;
pub mod socket;
