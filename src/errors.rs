//! # Bot Error Types Module
//!
//! Error taxonomy for the bot. Startup errors are fatal, runtime errors are
//! logged and absorbed by the handlers.

/// Custom error types for bot operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Required configuration is missing or invalid
    StartupConfig(String),
    /// A localized string needed by the content table is missing
    MissingContent(String),
    /// Button identifier outside the known grammar
    UnroutableEvent(String),
    /// The message to edit no longer exists or is inaccessible
    TransportEdit(String),
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::StartupConfig(msg) => write!(f, "Startup configuration error: {msg}"),
            BotError::MissingContent(msg) => write!(f, "Missing content: {msg}"),
            BotError::UnroutableEvent(data) => write!(f, "Unroutable event: {data}"),
            BotError::TransportEdit(msg) => write!(f, "Transport edit failure: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}
