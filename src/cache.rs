use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::client::SearchClient;
use crate::models::{FileSummary, ParsedQuery};

/// Observable state of one cached query, for UI rendering.
#[derive(Debug, Clone, Default)]
pub struct QuerySnapshot {
    /// Last successfully aggregated results. Kept visible while a
    /// refetch is in flight and across a failed refetch.
    pub files: Option<Vec<FileSummary>>,
    /// Message of the most recent failed fetch, cleared on success.
    pub error: Option<String>,
    pub is_fetching: bool,
}

#[derive(Default)]
struct EntryState {
    files: Option<Vec<FileSummary>>,
    error: Option<String>,
    is_fetching: bool,
    /// Bumped after every completed fetch, success or failure.
    generation: u64,
}

struct CacheEntry {
    fetch_lock: Mutex<()>,
    state: RwLock<EntryState>,
}

/// Request-lifecycle cache for search queries.
///
/// Entries are keyed by the query text plus the parsed filter state, so
/// equal searches share one cache slot. Concurrent fetches for the same
/// key are deduplicated: late callers wait on the in-flight request and
/// observe its outcome instead of issuing their own. Fetches are never
/// retried; failures surface immediately while the last good results
/// stay available as placeholder data.
#[derive(Default)]
pub struct SearchCache {
    entries: RwLock<HashMap<String, Arc<CacheEntry>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (or join an in-flight fetch of) the aggregated results for
    /// this query and filter state.
    pub async fn fetch(
        &self,
        client: &SearchClient,
        query: &str,
        parsed: Option<&ParsedQuery>,
    ) -> Result<Vec<FileSummary>> {
        let entry = self.entry(query, parsed);
        let seen = entry.state.read().generation;

        let _guard = entry.fetch_lock.lock().await;

        {
            let state = entry.state.read();
            if state.generation > seen {
                // A concurrent fetch for this key completed while we
                // waited; share its outcome.
                return match &state.error {
                    Some(msg) => Err(anyhow!(msg.clone())),
                    None => Ok(state.files.clone().unwrap_or_default()),
                };
            }
        }

        entry.state.write().is_fetching = true;

        let result = client.search(query, parsed).await;

        let mut state = entry.state.write();
        state.generation += 1;
        state.is_fetching = false;
        match result {
            Ok(files) => {
                state.files = Some(files.clone());
                state.error = None;
                Ok(files)
            }
            Err(err) => {
                // Previous files stay in place as placeholder data
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Current state of a cached query, without triggering a fetch.
    pub fn snapshot(&self, query: &str, parsed: Option<&ParsedQuery>) -> QuerySnapshot {
        let key = cache_key(query, parsed);
        let entries = self.entries.read();
        match entries.get(&key) {
            Some(entry) => {
                let state = entry.state.read();
                QuerySnapshot {
                    files: state.files.clone(),
                    error: state.error.clone(),
                    is_fetching: state.is_fetching,
                }
            }
            None => QuerySnapshot::default(),
        }
    }

    /// Drop the cached entry for this query; the next fetch starts cold.
    pub fn invalidate(&self, query: &str, parsed: Option<&ParsedQuery>) {
        let key = cache_key(query, parsed);
        self.entries.write().remove(&key);
    }

    fn entry(&self, query: &str, parsed: Option<&ParsedQuery>) -> Arc<CacheEntry> {
        let key = cache_key(query, parsed);
        let mut entries = self.entries.write();
        entries
            .entry(key)
            .or_insert_with(|| {
                Arc::new(CacheEntry {
                    fetch_lock: Mutex::new(()),
                    state: RwLock::new(EntryState::default()),
                })
            })
            .clone()
    }
}

/// Equal query + filter state must map to the same slot, so the key is
/// the JSON form of both.
fn cache_key(query: &str, parsed: Option<&ParsedQuery>) -> String {
    serde_json::to_string(&(query, parsed)).unwrap_or_else(|_| query.to_string())
}
