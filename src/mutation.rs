//! Mutation executor: runs a write and invalidates dependent queries.

use std::sync::Arc;

use metrics::counter;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::cache::{CacheKey, QueryCache};
use crate::request::RequestDescriptor;
use crate::transport::TransportError;

pub(crate) const METRIC_MUTATION_TOTAL: &str = "ucsb_admin_mutation_total";

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl MutationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(err) => err.status(),
        }
    }
}

type Builder<E> = Box<dyn Fn(&E) -> RequestDescriptor + Send + Sync>;

/// A write bound to a descriptor builder and the cache keys it makes stale.
pub struct Mutation<E> {
    cache: Arc<QueryCache>,
    build: Builder<E>,
    invalidates: Vec<CacheKey>,
}

impl<E> Mutation<E> {
    pub fn new(
        cache: Arc<QueryCache>,
        build: impl Fn(&E) -> RequestDescriptor + Send + Sync + 'static,
        invalidates: Vec<CacheKey>,
    ) -> Self {
        Self {
            cache,
            build: Box::new(build),
            invalidates,
        }
    }

    pub fn invalidates(&self) -> &[CacheKey] {
        &self.invalidates
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Executes the write for `entity`. Keys are invalidated only after the
    /// backend accepted it; failures leave the cache untouched.
    pub async fn mutate(&self, entity: &E) -> Result<Value, MutationError> {
        let request = (self.build)(entity);
        match self.cache.transport().execute(&request).await {
            Ok(payload) => {
                counter!(METRIC_MUTATION_TOTAL, "outcome" => "success").increment(1);
                self.cache.invalidate(&self.invalidates);
                info!(
                    request = %request,
                    invalidated = self.invalidates.len(),
                    "mutation applied"
                );
                Ok(payload)
            }
            Err(err) => {
                counter!(METRIC_MUTATION_TOTAL, "outcome" => "error").increment(1);
                warn!(request = %request, error = %err, "mutation failed");
                Err(err.into())
            }
        }
    }
}
