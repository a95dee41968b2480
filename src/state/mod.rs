//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`upload`, `chat`, `session`) so individual
//! components can depend on small focused models. Each model is plain data
//! with synchronous transition methods; components wrap them in signals and
//! drive the async edges.

pub mod chat;
pub mod session;
pub mod upload;
