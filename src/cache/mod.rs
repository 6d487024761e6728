//! Query cache — process-wide stale-while-revalidate cache for read endpoints.
//!
//! One instance is shared by every sub-client of a `CoopvaultClient`. Entries
//! hold raw JSON values keyed by [`QueryKey`]; sub-clients deserialize the
//! stored value into their envelope types on the way out.
//!
//! Behavior per key:
//! - fresh hit → cached value immediately, no network;
//! - stale hit (past the staleness window, inside the retention window) →
//!   cached value immediately plus a single background refresh;
//! - miss or evicted → the caller blocks on the fetch.
//!
//! At most one fetch is outstanding per key; concurrent callers join the same
//! in-flight fetch and receive the same resolved value. There is no automatic
//! refetch on re-mount or refocus while an entry is fresh.

pub mod key;

pub use key::{QueryKey, Resource};

use crate::error::HttpError;

use async_lock::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Default staleness window: entries are fresh for 5 minutes.
pub const DEFAULT_STALENESS: Duration = Duration::from_secs(5 * 60);

/// Default retention window: unused entries are evicted after 10 minutes.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(10 * 60);

/// Result shared between every caller that joined one fetch.
type FetchResult = Result<Arc<Value>, Arc<HttpError>>;

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Value, HttpError>> + Send>>;

/// A repeatable fetch for one key. Stored per entry so invalidation-driven
/// refreshes can re-run it without a caller present.
pub type Fetcher = Arc<dyn Fn() -> FetchFuture + Send + Sync>;

struct Entry {
    data: Arc<Value>,
    fetched_at: Instant,
    last_access: Instant,
    /// Forced stale by `invalidate`, regardless of age.
    invalidated: bool,
}

impl Entry {
    fn is_fresh(&self, staleness: Duration) -> bool {
        !self.invalidated && self.fetched_at.elapsed() < staleness
    }

    fn is_retained(&self, retention: Duration) -> bool {
        self.last_access.elapsed() < retention
    }
}

struct Slot {
    entry: Option<Entry>,
    /// Present while a fetch for this key is outstanding. Joiners clone the
    /// receiver and await the published result.
    in_flight: Option<watch::Receiver<Option<FetchResult>>>,
    /// Version counter bumped on every successful store; consumers subscribe
    /// to observe invalidation-driven refreshes.
    version: watch::Sender<u64>,
    fetcher: Fetcher,
}

impl Slot {
    fn new(fetcher: Fetcher) -> Self {
        Self {
            entry: None,
            in_flight: None,
            version: watch::channel(0).0,
            fetcher,
        }
    }
}

enum Plan {
    Hit(Arc<Value>),
    /// Stale data to serve now; the sender is present when this caller won
    /// the right to start the one background refresh.
    StaleHit(Arc<Value>, Option<watch::Sender<Option<FetchResult>>>),
    Join(watch::Receiver<Option<FetchResult>>),
    Lead(watch::Sender<Option<FetchResult>>),
}

/// Process-wide cache of query results, shared across all consuming views.
#[derive(Clone)]
pub struct QueryCache {
    slots: Arc<Mutex<HashMap<QueryKey, Slot>>>,
    staleness: Duration,
    retention: Duration,
}

impl QueryCache {
    pub fn new(staleness: Duration, retention: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            staleness,
            retention,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_STALENESS, DEFAULT_RETENTION)
    }

    /// Look up `key`, fetching as required.
    ///
    /// The fetcher passed here replaces the one stored for the key, so later
    /// background refreshes always run the most recent request shape.
    pub async fn query(&self, key: QueryKey, fetcher: Fetcher) -> Result<Arc<Value>, HttpError> {
        let plan = {
            let mut slots = self.slots.lock().await;
            self.sweep(&mut slots);

            let slot = slots
                .entry(key.clone())
                .or_insert_with(|| Slot::new(fetcher.clone()));
            slot.fetcher = fetcher;

            let retained = slot
                .entry
                .as_ref()
                .map_or(false, |e| e.is_retained(self.retention));
            if !retained {
                slot.entry = None;
            }

            if let Some(entry) = slot.entry.as_mut() {
                entry.last_access = Instant::now();
                if entry.is_fresh(self.staleness) {
                    Plan::Hit(entry.data.clone())
                } else {
                    let data = entry.data.clone();
                    if slot.in_flight.is_none() {
                        let (tx, rx) = watch::channel(None);
                        slot.in_flight = Some(rx);
                        Plan::StaleHit(data, Some(tx))
                    } else {
                        Plan::StaleHit(data, None)
                    }
                }
            } else if let Some(rx) = &slot.in_flight {
                Plan::Join(rx.clone())
            } else {
                let (tx, rx) = watch::channel(None);
                slot.in_flight = Some(rx);
                Plan::Lead(tx)
            }
        };

        match plan {
            Plan::Hit(data) => Ok(data),
            Plan::StaleHit(data, ticket) => {
                if let Some(tx) = ticket {
                    let cache = self.clone();
                    let key = key.clone();
                    tokio::spawn(async move {
                        let _ = cache.run_fetch(key, tx).await;
                    });
                }
                Ok(data)
            }
            Plan::Join(rx) => self.join_fetch(&key, rx).await,
            Plan::Lead(tx) => self.run_fetch(key, tx).await,
        }
    }

    /// Mark every entry of `resource` stale. Entries with live subscribers
    /// ("mounted consumers") are refreshed in the background immediately; the
    /// rest refetch lazily on next access.
    pub async fn invalidate(&self, resource: Resource) {
        let mut refreshes = Vec::new();
        {
            let mut slots = self.slots.lock().await;
            for (key, slot) in slots.iter_mut() {
                if key.resource() != resource {
                    continue;
                }
                let Some(entry) = slot.entry.as_mut() else {
                    continue;
                };
                entry.invalidated = true;
                if slot.version.receiver_count() > 0 && slot.in_flight.is_none() {
                    let (tx, rx) = watch::channel(None);
                    slot.in_flight = Some(rx);
                    refreshes.push((key.clone(), tx));
                }
            }
        }

        for (key, tx) in refreshes {
            let cache = self.clone();
            tokio::spawn(async move {
                let _ = cache.run_fetch(key, tx).await;
            });
        }
    }

    /// Watch successful stores for `key`. The watched value is a version
    /// counter; a change means refreshed data is available via `query`.
    /// Returns `None` for a key that has never been queried.
    pub async fn subscribe(&self, key: &QueryKey) -> Option<watch::Receiver<u64>> {
        self.slots
            .lock()
            .await
            .get(key)
            .map(|slot| slot.version.subscribe())
    }

    /// Drop every entry (e.g. on logout).
    pub async fn clear(&self) {
        self.slots.lock().await.clear();
    }

    /// Number of entries currently holding data.
    pub async fn len(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|slot| slot.entry.is_some())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop slots whose entry fell out of the retention window and that have
    /// neither an outstanding fetch nor live subscribers.
    fn sweep(&self, slots: &mut HashMap<QueryKey, Slot>) {
        let retention = self.retention;
        slots.retain(|_, slot| {
            slot.in_flight.is_some()
                || slot.version.receiver_count() > 0
                || slot
                    .entry
                    .as_ref()
                    .map_or(false, |e| e.is_retained(retention))
        });
    }

    /// Run the stored fetcher for `key`, publish the outcome to joiners, and
    /// store the value on success. On failure a previously cached value is
    /// left in place (stale, so a later access retries).
    async fn run_fetch(
        &self,
        key: QueryKey,
        tx: watch::Sender<Option<FetchResult>>,
    ) -> Result<Arc<Value>, HttpError> {
        let fetcher = {
            let slots = self.slots.lock().await;
            slots.get(&key).map(|slot| slot.fetcher.clone())
        };
        let Some(fetcher) = fetcher else {
            // Slot was cleared while we were scheduled; nothing to do.
            let outcome: FetchResult = Err(Arc::new(HttpError::BadRequest(
                "cache entry cleared during fetch".to_string(),
            )));
            let _ = tx.send(Some(outcome.clone()));
            return Err(HttpError::Shared(outcome.unwrap_err()));
        };

        let outcome: FetchResult = match fetcher().await {
            Ok(value) => Ok(Arc::new(value)),
            Err(e) => Err(Arc::new(e)),
        };

        {
            let mut slots = self.slots.lock().await;
            if let Some(slot) = slots.get_mut(&key) {
                slot.in_flight = None;
                if let Ok(data) = &outcome {
                    let now = Instant::now();
                    slot.entry = Some(Entry {
                        data: data.clone(),
                        fetched_at: now,
                        last_access: now,
                        invalidated: false,
                    });
                    slot.version.send_modify(|v| *v += 1);
                }
            }
        }

        let _ = tx.send(Some(outcome.clone()));
        match outcome {
            Ok(data) => Ok(data),
            Err(e) => Err(HttpError::Shared(e)),
        }
    }

    async fn join_fetch(
        &self,
        key: &QueryKey,
        mut rx: watch::Receiver<Option<FetchResult>>,
    ) -> Result<Arc<Value>, HttpError> {
        loop {
            let published = rx.borrow_and_update().clone();
            if let Some(outcome) = published {
                return match outcome {
                    Ok(data) => Ok(data),
                    Err(e) => Err(HttpError::Shared(e)),
                };
            }
            if rx.changed().await.is_err() {
                // The leading caller was dropped mid-fetch. Clear the
                // in-flight marker so the key is not wedged.
                let mut slots = self.slots.lock().await;
                if let Some(slot) = slots.get_mut(key) {
                    let same = slot
                        .in_flight
                        .as_ref()
                        .map_or(false, |stored| stored.same_channel(&rx));
                    if same {
                        slot.in_flight = None;
                    }
                }
                return Err(HttpError::BadRequest(
                    "cache fetch abandoned".to_string(),
                ));
            }
        }
    }
}
