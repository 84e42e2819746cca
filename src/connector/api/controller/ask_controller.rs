use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{OutputFormat, SelectionArgs};
use crate::domain::{ParamNormalizer, QueryParams, ResultEnvelope};

use super::super::Container;
use super::plan_formatter::format_plan;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, selection: SelectionArgs, format: OutputFormat) -> Result<String> {
        let params = ParamNormalizer::normalize(&selection.to_raw_selections());
        if !params.has_criteria() {
            bail!("Nothing to research: give a question or at least one preference, region, budget or companions value");
        }

        let envelope = self.research(&params).await?;

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&envelope)?),
            OutputFormat::Text => match envelope {
                ResultEnvelope::Success { data } => Ok(format_plan(&data)),
                ResultEnvelope::Failure { error } => bail!(error),
            },
        }
    }

    async fn research(&self, params: &QueryParams) -> Result<ResultEnvelope> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}")?);
        spinner.set_message(format!("Researching with {}...", self.container.model_name()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let envelope = self.container.research_use_case().submit_query(params).await;

        spinner.finish_and_clear();
        Ok(envelope)
    }
}
