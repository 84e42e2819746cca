use anyhow::Result;

use crate::domain::PromptBuilder;

pub struct SchemaController;

impl SchemaController {
    pub fn new() -> Self {
        Self
    }

    pub fn schema(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&PromptBuilder::response_schema())?)
    }
}

impl Default for SchemaController {
    fn default() -> Self {
        Self::new()
    }
}
