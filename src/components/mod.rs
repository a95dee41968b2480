//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload and chat surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod chat_panel;
pub mod result_card;
pub mod upload_panel;
