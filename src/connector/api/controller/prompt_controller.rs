use anyhow::Result;

use crate::cli::SelectionArgs;
use crate::domain::{ParamNormalizer, PromptBuilder};

pub struct PromptController;

impl PromptController {
    pub fn new() -> Self {
        Self
    }

    /// Render the request exactly as it would be sent. No network call.
    pub fn prompt(&self, selection: SelectionArgs, with_schema: bool) -> Result<String> {
        let params = ParamNormalizer::normalize(&selection.to_raw_selections());
        let prompt = PromptBuilder::build(&params);

        let mut output = format!("System:\n{}\n\nUser:\n{}", prompt.system, prompt.user);
        if with_schema {
            output.push_str("\n\nSchema:\n");
            output.push_str(&serde_json::to_string_pretty(&PromptBuilder::response_schema())?);
        }

        Ok(output)
    }
}

impl Default for PromptController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_schema_only_on_request() {
        let selection = SelectionArgs {
            query: Some("Surf spots?".to_string()),
            regions: vec!["puerto-plata".to_string()],
            ..SelectionArgs::default()
        };

        let plain = PromptController::new().prompt(selection.clone(), false).unwrap();
        assert!(plain.contains("User query: Surf spots?"));
        assert!(plain.contains("Regions of interest: Puerto Plata"));
        assert!(!plain.contains("Schema:"));

        let with_schema = PromptController::new().prompt(selection, true).unwrap();
        assert!(with_schema.contains("Schema:\n{"));
    }
}
