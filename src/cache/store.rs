//! Query cache storage.
//!
//! Each entry remembers the last payload, the last error and whether the
//! entry is stale. A fetch in flight is shared: later readers of the same key
//! wait on it instead of starting another request.

use std::sync::{Arc, RwLock};

use lru::LruCache;
use metrics::counter;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::request::RequestDescriptor;
use crate::transport::{Transport, TransportError};

use super::config::CacheConfig;
use super::keys::CacheKey;
use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

pub(crate) const METRIC_QUERY_HIT: &str = "ucsb_admin_query_hit_total";
pub(crate) const METRIC_QUERY_MISS: &str = "ucsb_admin_query_miss_total";
pub(crate) const METRIC_QUERY_ERROR: &str = "ucsb_admin_query_error_total";
pub(crate) const METRIC_INVALIDATE: &str = "ucsb_admin_cache_invalidate_total";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Pending,
    Success,
    Error,
}

/// What a reader sees for one key: data (or the caller's default), the last
/// error and the status.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<T> {
    pub data: T,
    pub error: Option<String>,
    pub status: QueryStatus,
    /// A fetch for this key is currently running.
    pub fetching: bool,
}

impl<T> QuerySnapshot<T> {
    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

struct Entry {
    data: Option<Value>,
    error: Option<String>,
    status: QueryStatus,
    stale: bool,
    generation: u64,
    /// Generation whose result is currently stored.
    settled: Option<u64>,
    inflight: Option<Inflight>,
}

/// The fetch currently running for an entry and the generation it started at.
struct Inflight {
    generation: u64,
    wait: watch::Receiver<bool>,
}

impl Entry {
    fn pending() -> Self {
        Self {
            data: None,
            error: None,
            status: QueryStatus::Pending,
            stale: true,
            generation: 0,
            settled: None,
            inflight: None,
        }
    }

    fn is_fresh(&self) -> bool {
        self.status == QueryStatus::Success && !self.stale
    }

    fn view(&self) -> EntryView {
        EntryView {
            data: self.data.clone(),
            error: self.error.clone(),
            status: self.status,
            fetching: self.inflight.is_some(),
        }
    }
}

struct EntryView {
    data: Option<Value>,
    error: Option<String>,
    status: QueryStatus,
    fetching: bool,
}

enum Claim {
    Fresh(EntryView),
    Start {
        generation: u64,
        done: watch::Sender<bool>,
        view: EntryView,
    },
    Joined {
        wait: watch::Receiver<bool>,
        view: EntryView,
    },
}

/// Process-wide query cache, injected wherever pages read or invalidate.
pub struct QueryCache {
    transport: Arc<dyn Transport>,
    entries: RwLock<LruCache<CacheKey, Entry>>,
}

impl QueryCache {
    pub fn new(transport: Arc<dyn Transport>, config: &CacheConfig) -> Self {
        Self {
            transport,
            entries: RwLock::new(LruCache::new(config.capacity_non_zero())),
        }
    }

    /// The transport used for fetches; mutations go through the same one.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Non-blocking read.
    ///
    /// Returns cached data when fresh. Otherwise a fetch is spawned on the
    /// current Tokio runtime (unless one is already running for `key`) and the
    /// snapshot carries `default` or the previously cached data while it runs.
    ///
    /// A failed fetch leaves the entry stale, so every later read of that key
    /// starts a new request. Callers that read on each render will retry an
    /// erroring endpoint once per render; check [`QuerySnapshot::is_error`]
    /// and stop reading if that is not wanted.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime and a fetch has to start.
    pub fn query<T: DeserializeOwned>(
        self: &Arc<Self>,
        key: &CacheKey,
        request: &RequestDescriptor,
        default: T,
    ) -> QuerySnapshot<T> {
        match self.claim(key) {
            Claim::Fresh(view) | Claim::Joined { view, .. } => decode(view, default),
            Claim::Start {
                generation,
                done,
                view,
            } => {
                let cache = Arc::clone(self);
                let key = key.clone();
                let request = request.clone();
                tokio::spawn(async move {
                    let result = cache.transport.execute(&request).await;
                    cache.complete(&key, generation, &done, result);
                });
                decode(view, default)
            }
        }
    }

    /// Read that waits for any needed fetch to finish before returning.
    ///
    /// Like [`QueryCache::query`], a key whose last fetch failed is fetched
    /// again on every call.
    pub async fn query_settled<T: DeserializeOwned>(
        &self,
        key: &CacheKey,
        request: &RequestDescriptor,
        default: T,
    ) -> QuerySnapshot<T> {
        match self.claim(key) {
            Claim::Fresh(view) => decode(view, default),
            Claim::Start {
                generation, done, ..
            } => {
                let result = self.transport.execute(request).await;
                self.complete(key, generation, &done, result);
                self.snapshot(key, default)
            }
            Claim::Joined { mut wait, .. } => {
                if wait.wait_for(|finished| *finished).await.is_err() {
                    warn!(key = %key, "shared fetch ended without completing");
                }
                self.snapshot(key, default)
            }
        }
    }

    /// Current state of `key` without triggering a fetch.
    pub fn peek<T: DeserializeOwned>(&self, key: &CacheKey, default: T) -> QuerySnapshot<T> {
        self.snapshot(key, default)
    }

    /// Marks every key stale so the next read refetches. Cached data is kept
    /// for display until the refetch lands.
    pub fn invalidate<'a>(&self, keys: impl IntoIterator<Item = &'a CacheKey>) {
        let mut entries = rw_write(&self.entries, SOURCE, "invalidate");
        for key in keys {
            counter!(METRIC_INVALIDATE).increment(1);
            if let Some(entry) = entries.peek_mut(key) {
                entry.stale = true;
                entry.generation += 1;
                debug!(key = %key, "cache key invalidated");
            }
        }
    }

    pub fn invalidate_all(&self) {
        let mut entries = rw_write(&self.entries, SOURCE, "invalidate_all");
        for (_, entry) in entries.iter_mut() {
            entry.stale = true;
            entry.generation += 1;
        }
    }

    pub fn is_stale(&self, key: &CacheKey) -> bool {
        rw_read(&self.entries, SOURCE, "is_stale")
            .peek(key)
            .is_none_or(|entry| !entry.is_fresh())
    }

    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn claim(&self, key: &CacheKey) -> Claim {
        let mut entries = rw_write(&self.entries, SOURCE, "claim");
        let entry = entries.get_or_insert_mut(key.clone(), Entry::pending);

        if entry.is_fresh() {
            counter!(METRIC_QUERY_HIT).increment(1);
            return Claim::Fresh(entry.view());
        }
        if let Some(inflight) = &entry.inflight {
            // A dropped sender means the fetching task went away mid-request.
            // A fetch started before the last invalidation cannot satisfy
            // this read.
            if inflight.wait.has_changed().is_ok() && inflight.generation == entry.generation {
                return Claim::Joined {
                    wait: inflight.wait.clone(),
                    view: entry.view(),
                };
            }
        }

        counter!(METRIC_QUERY_MISS).increment(1);
        let (done, wait) = watch::channel(false);
        entry.inflight = Some(Inflight {
            generation: entry.generation,
            wait,
        });
        if entry.data.is_none() {
            entry.status = QueryStatus::Pending;
        }
        debug!(key = %key, "starting fetch");
        Claim::Start {
            generation: entry.generation,
            done,
            view: entry.view(),
        }
    }

    fn complete(
        &self,
        key: &CacheKey,
        generation: u64,
        done: &watch::Sender<bool>,
        result: Result<Value, TransportError>,
    ) {
        {
            let mut entries = rw_write(&self.entries, SOURCE, "complete");
            let entry = entries.get_or_insert_mut(key.clone(), Entry::pending);
            let superseded = entry
                .inflight
                .as_ref()
                .is_some_and(|inflight| inflight.generation > generation)
                || entry.settled.is_some_and(|settled| settled > generation);
            if superseded {
                debug!(key = %key, generation, "dropping result of superseded fetch");
                drop(entries);
                done.send_replace(true);
                return;
            }
            entry.inflight = None;
            entry.settled = Some(generation);
            match result {
                Ok(value) => {
                    entry.data = Some(value);
                    entry.error = None;
                    entry.status = QueryStatus::Success;
                    // Invalidated while the request was running.
                    entry.stale = entry.generation != generation;
                }
                Err(err) => {
                    counter!(METRIC_QUERY_ERROR).increment(1);
                    warn!(key = %key, error = %err, "query failed");
                    entry.error = Some(err.to_string());
                    entry.status = QueryStatus::Error;
                    entry.stale = true;
                }
            }
        }
        done.send_replace(true);
    }

    fn snapshot<T: DeserializeOwned>(&self, key: &CacheKey, default: T) -> QuerySnapshot<T> {
        let view = rw_read(&self.entries, SOURCE, "snapshot")
            .peek(key)
            .map(Entry::view);
        match view {
            Some(view) => decode(view, default),
            None => QuerySnapshot {
                data: default,
                error: None,
                status: QueryStatus::Pending,
                fetching: false,
            },
        }
    }
}

fn decode<T: DeserializeOwned>(view: EntryView, default: T) -> QuerySnapshot<T> {
    let EntryView {
        data,
        error,
        status,
        fetching,
    } = view;
    match data.map(serde_json::from_value::<T>) {
        None => QuerySnapshot {
            data: default,
            error,
            status,
            fetching,
        },
        Some(Ok(data)) => QuerySnapshot {
            data,
            error,
            status,
            fetching,
        },
        Some(Err(err)) => QuerySnapshot {
            data: default,
            error: Some(format!("failed to decode cached payload: {err}")),
            status: QueryStatus::Error,
            fetching,
        },
    }
}
