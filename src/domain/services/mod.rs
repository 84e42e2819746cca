//! Domain services implementing the research pipeline's pure steps.

pub mod curated_content;
mod fallback_synthesizer;
mod param_normalizer;
mod prompt_builder;
mod response_interpreter;
pub mod section_extractor;

pub use fallback_synthesizer::*;
pub use param_normalizer::*;
pub use prompt_builder::*;
pub use response_interpreter::*;
