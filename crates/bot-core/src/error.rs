//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` or wrap it as one variant, whichever keeps call sites clean.

use thiserror::Error;

use crate::BotId;

/// The top-level error type for `bot-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("bot {0} not found")]
    BotNotFound(BotId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `bot-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
