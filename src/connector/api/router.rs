use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ChatController, PromptController, SchemaController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    chat_controller: ChatController<'a>,
    prompt_controller: PromptController,
    schema_controller: SchemaController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            chat_controller: ChatController::new(container),
            prompt_controller: PromptController::new(),
            schema_controller: SchemaController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { selection, format } => self.ask_controller.ask(selection, format).await,
            Commands::Prompt {
                selection,
                with_schema,
            } => self.prompt_controller.prompt(selection, with_schema),
            Commands::Schema => self.schema_controller.schema(),
            Commands::Chat { selection } => self.chat_controller.chat(selection).await,
        }
    }
}
