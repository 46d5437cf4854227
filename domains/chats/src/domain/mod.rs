//! Domain model for the Chats domain

pub mod entities;
pub mod prompts;
pub mod render;
