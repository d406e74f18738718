use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::LoadError;
use crate::mutation::MutationError;
use crate::page::PageError;
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Mutation(#[from] MutationError),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("failed to read session file {path}: {source}")]
    SessionFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl AppError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }

    /// The error and every source below it, outermost first.
    pub fn chain(&self) -> Vec<String> {
        error_chain(self)
    }
}

pub fn error_chain(error: &dyn StdError) -> Vec<String> {
    let mut messages = vec![error.to_string()];
    let mut current = error.source();
    while let Some(inner) = current {
        let text = inner.to_string();
        if messages.last() != Some(&text) {
            messages.push(text);
        }
        current = inner.source();
    }
    messages
}
