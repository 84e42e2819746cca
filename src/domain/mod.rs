//! # Domain Layer
//!
//! Travel plan models and the pure pieces of the research pipeline:
//! parameter normalization, prompt construction, response interpretation and
//! deterministic plan synthesis. Nothing here performs I/O.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
