//! Configuration for the admin frontend.

use anyhow::{Context, Result};
use confile_admin_shared::DashboardConfig;
use web_sys::console;

use crate::utils;

/// `<script id="admin-config" type="application/json">` carrying overrides.
pub const CONFIG_SCRIPT_ID: &str = "admin-config";

// KPI refresh interval can be pinned at build time, the same way the API base
// is for the blog frontend: CONFILE_ADMIN_KPI_REFRESH_MS=5000 trunk build
const KPI_REFRESH_OVERRIDE: Option<&str> = option_env!("CONFILE_ADMIN_KPI_REFRESH_MS");

pub fn load() -> DashboardConfig {
    let mut config = match read_inline() {
        Ok(Some(config)) => config,
        Ok(None) => DashboardConfig::default(),
        Err(err) => {
            console::warn_1(&format!("Using default admin config: {err:#}").into());
            DashboardConfig::default()
        },
    };

    if let Some(ms) = KPI_REFRESH_OVERRIDE
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
    {
        config.kpi_refresh_ms = ms;
    }
    config
}

fn read_inline() -> Result<Option<DashboardConfig>> {
    let Some(script) = utils::by_id(CONFIG_SCRIPT_ID) else {
        return Ok(None);
    };
    let raw = script.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    DashboardConfig::from_json(&raw)
        .map(Some)
        .with_context(|| format!("parse #{CONFIG_SCRIPT_ID}"))
}
