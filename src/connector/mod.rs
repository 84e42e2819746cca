//! # Connector Layer
//!
//! External integrations and the command surface:
//! - Research clients (OpenAI over HTTP, scripted mock for offline use)
//! - API container, router and controllers driven by the CLI

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
