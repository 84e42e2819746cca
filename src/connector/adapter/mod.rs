mod mock_research_client;
mod openai_research_client;

pub use mock_research_client::*;
pub use openai_research_client::*;
