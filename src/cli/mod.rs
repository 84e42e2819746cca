use clap::{Args, Subcommand, ValueEnum};

use crate::domain::RawSelections;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Traveler selections shared by every command that builds a prompt.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Free-form travel question
    pub query: Option<String>,

    /// Travel style: adventure, beach, cultural, luxury, budget, family, solo
    #[arg(short = 'p', long = "preference")]
    pub preferences: Vec<String>,

    /// Region: santo-domingo, punta-cana, samana, puerto-plata, la-romana, all
    #[arg(short = 'r', long = "region")]
    pub regions: Vec<String>,

    #[arg(long)]
    pub budget: Option<String>,

    /// Who is coming along (e.g. "family", "couple")
    #[arg(long)]
    pub companions: Option<String>,
}

impl SelectionArgs {
    pub fn to_raw_selections(&self) -> RawSelections {
        RawSelections {
            query: self.query.clone(),
            preferences: self.preferences.iter().cloned().map(Some).collect(),
            regions: self.regions.iter().cloned().map(Some).collect(),
            budget: self.budget.clone(),
            companions: self.companions.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Research a travel plan for the given selections
    Ask {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the prompt that would be sent, without calling the service
    Prompt {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Also print the structured-output JSON schema
        #[arg(long)]
        with_schema: bool,
    },

    /// Print the structured-output JSON schema
    Schema,

    /// Interactive session: each line is a new question using the given selections
    Chat {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}
