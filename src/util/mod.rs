//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and text-transform code lives here, away from components,
//! so it stays testable on the host without a browser environment.

pub mod format;
pub mod markdown;
