use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use confile_admin_shared::{
    sample::{fixture_users, SampleData},
    DashboardConfig, MemoryStore,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::console;

pub const USERS_SLOT: &str = "__USERS_SAMPLE";
pub const AUDIT_SLOT: &str = "__AUDIT_SAMPLE";
pub const ACTIVITY_SLOT: &str = "__ACTIVITY_SAMPLE";

/// Read a JSON-compatible array the host page left on `window`.
fn read_global<T: DeserializeOwned>(slot: &str) -> Result<Option<Vec<T>>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(slot))
        .map_err(|err| anyhow!("read window.{slot}: {err:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|err| anyhow!("stringify window.{slot}: {err:?}"))?
        .into();
    serde_json::from_str(&json)
        .map(Some)
        .with_context(|| format!("parse window.{slot}"))
}

/// Host-provided records win over generated ones; unreadable slots are
/// reported and skipped.
fn host_or<T: DeserializeOwned>(slot: &str, generated: Vec<T>) -> Vec<T> {
    match read_global(slot) {
        Ok(Some(records)) => records,
        Ok(None) => generated,
        Err(err) => {
            console::warn_1(&format!("Ignoring host sample data: {err:#}").into());
            generated
        },
    }
}

pub fn initial_store(config: &DashboardConfig) -> MemoryStore {
    let now = Utc::now();
    let sample = SampleData::build(&config.samples, now, &mut rand::thread_rng());

    let users = host_or(USERS_SLOT, sample.users);
    let audit = host_or(AUDIT_SLOT, sample.audit);
    let activity = host_or(ACTIVITY_SLOT, sample.activity);

    match MemoryStore::new(users, audit.clone(), activity.clone(), Vec::new()) {
        Ok(store) => store,
        Err(err) => {
            console::error_1(&format!("Rejected host users: {err}").into());
            MemoryStore::new(fixture_users(), audit, activity, Vec::new()).unwrap_or_default()
        },
    }
}
