//! Browser persistence boundary
//!
//! Wraps `localStorage` behind the shared [`KeyValueStore`] trait and sources
//! the current time from the JavaScript clock. Write failures (quota, private
//! browsing) are logged and surfaced as [`ParkError::StorageWrite`].

use chrono::{DateTime, TimeZone, Utc};
use web_sys::console;

use shared::error::{ParkError, ParkResult};
use shared::models::PredictionRecord;
use shared::storage::{is_fresh, parse_timestamp, KeyValueStore, PREDICTION_TIMESTAMP_KEY};

/// `localStorage`-backed store
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open the window's localStorage.
    ///
    /// Fails when there is no window or the storage API is blocked.
    pub fn open() -> ParkResult<Self> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(ParkError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> ParkResult<()> {
        self.storage.set_item(key, value).map_err(|err| {
            console::warn_1(&format!("storage write failed for {key}: {err:?}").into());
            ParkError::StorageWrite(format!("{err:?}"))
        })
    }
}

/// Current time from the JavaScript clock
pub fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Load the current prediction context, logging when a stale cache is
/// bypassed
pub fn load_current(store: &BrowserStore) -> PredictionRecord {
    let now = now();
    if let Some(raw) = store.get(PREDICTION_TIMESTAMP_KEY) {
        if let Some(written_at) = parse_timestamp(&raw) {
            if !is_fresh(written_at, now) {
                console::warn_1(&"cached prediction is stale, using defaults".into());
            }
        }
    }
    shared::storage::load_prediction(store, now)
}
