// src/application/commands/messages/mod.rs
mod create;
mod service;
mod update;

pub use create::CreateMessageCommand;
pub use service::MessageCommandService;
pub use update::UpdateMessageCommand;
