//! # Application Layer
//!
//! Use cases orchestrating the domain pipeline around an injected
//! [`ResearchClient`].

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
