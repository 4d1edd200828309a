//! WebAssembly module for ParkPredict India
//!
//! Provides client-side computation for:
//! - Adjusted parking probability
//! - Availability and tow-risk classification
//! - Catalogue search with recent-search history
//! - Cached prediction context and user settings

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use shared::adjust::adjust_probability;
use shared::error::ParkError;
use shared::models::{
    catalogue, default_viewport, popular, AppSettings, MapDisplayState, PredictionRecord,
};
use shared::policy::{self, AvailabilityLevel, TowRiskLevel};
use shared::search::search_catalogue;
use shared::storage as store_ops;
use shared::types::ParkingMode;

mod storage;

pub use storage::BrowserStore;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: ParkError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| to_js_error(err.into()))
}

/// Apply the active mode factors to a base probability
#[wasm_bindgen]
pub fn adjusted_probability(base: f64, monsoon: bool, festival: bool, two_wheeler: bool) -> f64 {
    adjust_probability(base, monsoon, festival, two_wheeler)
}

/// Badge label for a displayed probability ("High Chance" / "Moderate Chance"
/// / "Low Chance")
#[wasm_bindgen]
pub fn availability_label(probability: f64) -> String {
    AvailabilityLevel::classify(probability).label().to_string()
}

/// Theme color key for a displayed probability
#[wasm_bindgen]
pub fn availability_color(probability: f64) -> String {
    AvailabilityLevel::classify(probability).color().to_string()
}

/// Tow-risk tier ("High" / "Medium" / "Low")
#[wasm_bindgen]
pub fn tow_risk_level(tow_risk: f64) -> String {
    TowRiskLevel::classify(tow_risk).to_string()
}

/// Whether the tow-risk alert should be shown
#[wasm_bindgen]
pub fn tow_alert_visible(tow_risk: f64) -> bool {
    policy::tow_alert_visible(tow_risk)
}

/// Whether the auto-rickshaw fallback should be suggested for an adjusted
/// probability
#[wasm_bindgen]
pub fn auto_stand_suggested(adjusted_probability: f64) -> bool {
    policy::suggests_auto_stand(adjusted_probability)
}

/// Load the current prediction context as JSON.
///
/// Returns the cached record while it is fresh, the default context
/// otherwise.
#[wasm_bindgen]
pub fn load_prediction() -> Result<String, JsValue> {
    let store = BrowserStore::open().map_err(to_js_error)?;
    let record = storage::load_current(&store);
    to_json(&record)
}

/// Persist a prediction context received from the frontend
#[wasm_bindgen]
pub fn save_prediction(record_json: &str) -> Result<(), JsValue> {
    let record: PredictionRecord =
        serde_json::from_str(record_json).map_err(|err| to_js_error(err.into()))?;
    let mut store = BrowserStore::open().map_err(to_js_error)?;
    store_ops::save_prediction(&mut store, &record, storage::now()).map_err(to_js_error)
}

/// Toggle one of the prediction modes ("monsoon" / "festival" /
/// "twoWheeler"), persist, and return the updated context as JSON
#[wasm_bindgen]
pub fn set_mode(mode: &str, enabled: bool) -> Result<String, JsValue> {
    let mode: ParkingMode = mode.parse().map_err(to_js_error)?;
    let mut store = BrowserStore::open().map_err(to_js_error)?;
    let mut record = storage::load_current(&store);
    record.set_mode(mode, enabled);
    store_ops::save_prediction(&mut store, &record, storage::now()).map_err(to_js_error)?;
    to_json(&record)
}

/// Replace the prediction context with a selected catalogue entry, persist,
/// and return the new context as JSON
#[wasm_bindgen]
pub fn select_location(id: &str) -> Result<String, JsValue> {
    let entries = catalogue();
    let entry = entries
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| to_js_error(ParkError::UnknownLocation(id.to_string())))?;

    // Stand-in for a removal-risk model: uniform in [0, 0.3)
    let tow_risk = js_sys::Math::random() * 0.3;

    let record = PredictionRecord::from_catalogue(entry, tow_risk);
    let mut store = BrowserStore::open().map_err(to_js_error)?;
    store_ops::save_prediction(&mut store, &record, storage::now()).map_err(to_js_error)?;
    to_json(&record)
}

/// Search the catalogue and return matching entries as JSON.
///
/// Waits `delay_ms` first to mimic network latency (pass 0 to skip).
/// Executed queries are recorded in the recent-searches list; an empty or
/// whitespace-only query short-circuits to an empty result without touching
/// persisted state.
#[wasm_bindgen]
pub async fn search_locations(query: String, delay_ms: u32) -> Result<String, JsValue> {
    let query = query.trim().to_string();
    if query.is_empty() {
        return Ok("[]".to_string());
    }

    sleep(delay_ms).await?;

    let entries = catalogue();
    let matches = search_catalogue(&query, &entries);
    let serialized = to_json(&matches)?;

    let mut store = BrowserStore::open().map_err(to_js_error)?;
    store_ops::record_search(&mut store, &query).map_err(to_js_error)?;

    Ok(serialized)
}

/// The recent-searches list as JSON, most recent first
#[wasm_bindgen]
pub fn recent_searches() -> Result<String, JsValue> {
    let store = BrowserStore::open().map_err(to_js_error)?;
    to_json(&store_ops::load_recent_searches(&store))
}

/// The top three catalogue entries as JSON, shown as popular locations
#[wasm_bindgen]
pub fn popular_locations() -> Result<String, JsValue> {
    to_json(&popular(3))
}

/// Load user settings as JSON, defaults when nothing is saved
#[wasm_bindgen]
pub fn load_settings() -> Result<String, JsValue> {
    let store = BrowserStore::open().map_err(to_js_error)?;
    to_json(&store_ops::load_settings(&store))
}

/// Persist user settings received from the frontend (explicit save)
#[wasm_bindgen]
pub fn save_settings(settings_json: &str) -> Result<(), JsValue> {
    let settings: AppSettings =
        serde_json::from_str(settings_json).map_err(|err| to_js_error(err.into()))?;
    let mut store = BrowserStore::open().map_err(to_js_error)?;
    store_ops::save_settings(&mut store, &settings).map_err(to_js_error)
}

/// Viewport the map collaborator should render, as JSON
#[wasm_bindgen]
pub fn default_map_viewport(location_title: &str) -> Result<String, JsValue> {
    to_json(&default_viewport(location_title))
}

/// Display state of the map surface ("loading" / "ready" / "offline" /
/// "error")
#[wasm_bindgen]
pub fn map_display_state(is_offline: bool, load_failed: bool, loaded: bool) -> String {
    MapDisplayState::resolve(is_offline, load_failed, loaded)
        .wire_name()
        .to_string()
}

async fn sleep(ms: u32) -> Result<(), JsValue> {
    if ms == 0 {
        return Ok(());
    }

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .ok()
        });
        if scheduled.is_none() {
            // No window or scheduling failure: resolve immediately rather
            // than hang the search
            let _ = resolve.call0(&JsValue::NULL);
        }
    });

    JsFuture::from(promise).await.map(|_| ())
}
