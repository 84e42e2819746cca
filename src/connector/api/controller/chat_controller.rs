use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::TravelSession;
use crate::cli::SelectionArgs;
use crate::domain::{ParamNormalizer, ResultEnvelope};

use super::super::Container;
use super::plan_formatter::format_plan;

const HELP: &str = "Type a question to research it. Commands: \
    /show (current plan), /save, /saved, /clear, /help, /quit";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Interactive loop over stdin.
    pub async fn chat(&self, selection: SelectionArgs) -> Result<String> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.run(selection, stdin, &mut stdout).await
    }

    /// Runs the session until `/quit` or end of input. Each line is an
    /// independent query combined with the selections given on the command line.
    pub async fn run<R, W>(&self, selection: SelectionArgs, input: R, out: &mut W) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let session = self.container.session();
        let mut lines = input.lines();

        writeln!(out, "{HELP}")?;
        write!(out, "> ")?;
        out.flush()?;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            match line {
                "" => {}
                "/quit" | "/exit" => break,
                "/help" => writeln!(out, "{HELP}")?,
                "/show" => match session.current_response().await {
                    Some(plan) => writeln!(out, "{}", format_plan(&plan))?,
                    None => writeln!(out, "No current plan.")?,
                },
                "/clear" => {
                    session.clear_response().await;
                    writeln!(out, "Cleared.")?;
                }
                "/save" => match session.save_current_response().await {
                    Some(saved) => writeln!(out, "Saved itinerary {}", saved.id())?,
                    None => writeln!(out, "Nothing to save yet.")?,
                },
                "/saved" => self.list_saved(&session, out).await?,
                question => self.ask(&session, &selection, question, out).await?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        let saved = session.saved_itineraries().await.len();
        Ok(format!("\nSession ended with {saved} saved itinerary(ies)."))
    }

    async fn ask<W: Write>(
        &self,
        session: &TravelSession,
        selection: &SelectionArgs,
        question: &str,
        out: &mut W,
    ) -> Result<()> {
        let mut raw = selection.to_raw_selections();
        raw.query = Some(question.to_string());
        let params = ParamNormalizer::normalize(&raw);

        match session.submit(params).await {
            ResultEnvelope::Success { data } => writeln!(out, "{}", format_plan(&data))?,
            ResultEnvelope::Failure { error } => writeln!(out, "Error: {error}")?,
        }
        Ok(())
    }

    async fn list_saved<W: Write>(&self, session: &TravelSession, out: &mut W) -> Result<()> {
        let saved = session.saved_itineraries().await;
        if saved.is_empty() {
            writeln!(out, "No saved itineraries.")?;
            return Ok(());
        }
        for (i, itinerary) in saved.iter().enumerate() {
            writeln!(
                out,
                "{}. {} [{}] {}",
                i + 1,
                itinerary.id(),
                itinerary.saved_at(),
                itinerary.plan().summary
            )?;
        }
        Ok(())
    }
}
