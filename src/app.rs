//! Wiring from resolved settings to a ready query cache.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheConfig, QueryCache};
use crate::config::Settings;
use crate::error::AppError;
use crate::transport::{HttpTransport, Transport};

/// Reads a session cookie value from `path`, trimming surrounding whitespace.
pub fn read_session_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map(|contents| contents.trim().to_string())
        .map_err(|source| AppError::SessionFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds the shared cache over an HTTP transport. The configured session
/// file takes precedence over `fallback_session`.
pub fn build_cache(
    settings: &Settings,
    fallback_session: Option<String>,
) -> Result<Arc<QueryCache>, AppError> {
    let session = match settings.backend.session_file.as_deref() {
        Some(path) => Some(read_session_file(path)?),
        None => fallback_session,
    }
    .filter(|value| !value.is_empty());

    debug!(
        backend = %settings.backend.url,
        authenticated = session.is_some(),
        "building backend client"
    );

    let transport = HttpTransport::new(
        &settings.backend.url,
        session,
        settings.backend.request_timeout,
    )?;
    Ok(Arc::new(QueryCache::new(
        Arc::new(transport) as Arc<dyn Transport>,
        &CacheConfig::from(&settings.cache),
    )))
}
