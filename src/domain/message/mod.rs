// src/domain/message/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Message, MessageUpdate, NewMessage};
pub use repository::MessageRepository;
pub use value_objects::{EmailAddress, MessageId, MessageText, PersonName, PhoneNumber};
