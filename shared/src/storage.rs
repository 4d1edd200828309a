//! Client-side persistence and the cache-staleness contract
//!
//! State is kept in a key-value store (localStorage in the browser). The
//! prediction context is written on every mutation together with a write
//! timestamp, and read back on startup only while the timestamp is inside
//! the freshness window; stale or unparseable data is bypassed, not deleted.
//! Settings have an independent lifecycle and are written on explicit save
//! only.

use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::error::ParkResult;
use crate::models::{AppSettings, PredictionRecord};
use crate::search::remember_query;

/// Serialized prediction context
pub const PREDICTION_KEY: &str = "parkingData";
/// Epoch-millisecond write timestamp of the prediction context
pub const PREDICTION_TIMESTAMP_KEY: &str = "parkingDataTimestamp";
/// Serialized user preferences
pub const SETTINGS_KEY: &str = "appSettings";
/// Serialized recent-searches list
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Cached prediction contexts older than this are treated as stale
pub fn freshness_window() -> Duration {
    Duration::hours(4)
}

/// Persistence boundary.
///
/// Reads are infallible (a missing or unreadable value is `None`); writes can
/// fail when the backing store is full or unavailable.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> ParkResult<()>;
}

/// In-memory store backend, used by tests and non-browser hosts
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ParkResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a persisted epoch-millisecond timestamp
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = raw.parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Whether a write timestamp is still inside the freshness window.
///
/// Exclusive boundary: a record written exactly four hours ago is stale.
pub fn is_fresh(written_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(written_at) < freshness_window()
}

/// Load the prediction context, falling back to the default.
///
/// The stored record is returned only when its timestamp parses and is
/// strictly inside the freshness window and the record itself deserializes.
/// Corrupt or stale data is left in place and silently ignored.
pub fn load_prediction<S: KeyValueStore>(store: &S, now: DateTime<Utc>) -> PredictionRecord {
    let stored = store.get(PREDICTION_KEY);
    let timestamp = store.get(PREDICTION_TIMESTAMP_KEY);

    if let (Some(raw), Some(ts)) = (stored, timestamp) {
        if let Some(written_at) = parse_timestamp(&ts) {
            if is_fresh(written_at, now) {
                if let Ok(record) = serde_json::from_str(&raw) {
                    return record;
                }
            }
        }
    }

    PredictionRecord::default()
}

/// Persist the prediction context together with its write timestamp.
///
/// Called after every mutation; there is no batching or debouncing.
pub fn save_prediction<S: KeyValueStore>(
    store: &mut S,
    record: &PredictionRecord,
    now: DateTime<Utc>,
) -> ParkResult<()> {
    let serialized = serde_json::to_string(record)?;
    store.set(PREDICTION_KEY, &serialized)?;
    store.set(
        PREDICTION_TIMESTAMP_KEY,
        &now.timestamp_millis().to_string(),
    )?;
    Ok(())
}

/// Load user preferences, falling back to the default on missing or
/// unparseable data
pub fn load_settings<S: KeyValueStore>(store: &S) -> AppSettings {
    store
        .get(SETTINGS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist user preferences. Called on explicit save only.
pub fn save_settings<S: KeyValueStore>(store: &mut S, settings: &AppSettings) -> ParkResult<()> {
    let serialized = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &serialized)?;
    Ok(())
}

/// Load the recent-searches list, most recent first
pub fn load_recent_searches<S: KeyValueStore>(store: &S) -> Vec<String> {
    store
        .get(RECENT_SEARCHES_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Record an executed query and persist the updated list.
///
/// Returns the updated list so the caller can render it without re-reading
/// the store.
pub fn record_search<S: KeyValueStore>(store: &mut S, query: &str) -> ParkResult<Vec<String>> {
    let mut recent = load_recent_searches(store);
    remember_query(&mut recent, query);
    let serialized = serde_json::to_string(&recent)?;
    store.set(RECENT_SEARCHES_KEY, &serialized)?;
    Ok(recent)
}
