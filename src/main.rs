use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use travelsearch::{ApiStyle, Commands, Container, ContainerConfig, ReasoningEffort, Router};

#[derive(Parser)]
#[command(name = "travelsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer offline with deterministic synthesized plans
    #[arg(long, global = true)]
    mock: bool,

    #[arg(long, global = true)]
    model: Option<String>,

    /// low, medium or high
    #[arg(long, global = true)]
    reasoning_effort: Option<ReasoningEffort>,

    #[arg(long, global = true)]
    max_output_tokens: Option<u32>,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    base_url: Option<String>,

    /// chat (Chat Completions) or responses (Responses API)
    #[arg(long, global = true)]
    api_style: Option<ApiStyle>,

    /// Do not attach the travel plan JSON schema to requests
    #[arg(long, global = true)]
    no_structured_output: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Offline commands never touch the completion service.
    let needs_client = matches!(cli.command, Commands::Ask { .. } | Commands::Chat { .. });

    let config = ContainerConfig {
        mock: cli.mock || !needs_client,
        model: cli.model,
        reasoning_effort: cli.reasoning_effort,
        max_output_tokens: cli.max_output_tokens,
        timeout_secs: cli.timeout_secs,
        base_url: cli.base_url,
        api_style: cli.api_style,
        structured_output: !cli.no_structured_output,
    };

    let container = Container::new(config)?;
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "travelsearch",
            "ask",
            "Beaches?",
            "--mock",
            "--reasoning-effort",
            "high",
            "--api-style",
            "responses",
        ])
        .unwrap();
        assert!(cli.mock);
        assert_eq!(cli.reasoning_effort, Some(ReasoningEffort::High));
        assert_eq!(cli.api_style, Some(ApiStyle::Responses));
    }

    #[test]
    fn unknown_effort_is_rejected() {
        let res = Cli::try_parse_from(["travelsearch", "--reasoning-effort", "extreme", "schema"]);
        assert!(res.is_err());
    }
}
