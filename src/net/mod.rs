//! Networking modules for the prediction and chat backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls, `types` defines the shared wire schema. Both
//! backends are reached through same-origin `/api` paths.

pub mod api;
pub mod types;
