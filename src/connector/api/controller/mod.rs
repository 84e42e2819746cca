pub mod ask_controller;
pub mod chat_controller;
pub mod plan_formatter;
pub mod prompt_controller;
pub mod schema_controller;

pub use ask_controller::AskController;
pub use chat_controller::ChatController;
pub use prompt_controller::PromptController;
pub use schema_controller::SchemaController;
