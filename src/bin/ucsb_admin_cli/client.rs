#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use ucsb_admin::app::build_cache;
use ucsb_admin::cache::QueryCache;
use ucsb_admin::config::{LoadError, Settings};
use ucsb_admin::error::AppError;
use ucsb_admin::page::{
    NavigationIntent, Navigator, Notifier, PageContext, PageError, Toast, ToastKind,
};

use crate::args::{Cli, OutputFormat};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("request failed: {0}")]
    Query(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("missing required option {0}")]
    MissingField(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Output(String),
}

/// Prints toasts to stderr so stdout carries only command output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => eprintln!("{}", toast.text),
            ToastKind::Error => eprintln!("error: {}", toast.text),
        }
    }
}

/// There is no router on the command line; redirects are only traced.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        debug!(?intent, "navigation requested");
    }
}

#[derive(Clone)]
pub struct Ctx {
    pub pages: PageContext,
    pub format: OutputFormat,
}

impl Ctx {
    pub fn new(cache: Arc<QueryCache>, format: OutputFormat) -> Self {
        Self {
            pages: PageContext::new(cache, Arc::new(ConsoleNotifier), Arc::new(ConsoleNavigator)),
            format,
        }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.pages.cache
    }
}

pub fn build_ctx_from_cli(cli: &Cli, settings: &Settings) -> Result<Ctx, CliError> {
    let cache = build_cache(settings, cli.session_env.clone())?;
    Ok(Ctx::new(cache, cli.format))
}
