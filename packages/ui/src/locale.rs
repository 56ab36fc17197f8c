//! Which date convention the viewer expects.

use report::{DateFormatter, DateLocale};
use store::DashboardConfig;

/// Configured locale first, then the browser or OS language, then en-US.
pub fn viewer_locale(config: &DashboardConfig) -> DateLocale {
    config
        .locale()
        .map(str::to_string)
        .or_else(system_locale)
        .map(|tag| DateLocale::from_tag(&tag))
        .unwrap_or_default()
}

/// Date cells in the viewer's locale and time zone.
pub fn viewer_dates(config: &DashboardConfig) -> DateFormatter {
    DateFormatter::local(viewer_locale(config))
}

#[cfg(target_arch = "wasm32")]
fn system_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}

#[cfg(not(target_arch = "wasm32"))]
fn system_locale() -> Option<String> {
    locale_from_env(|key| std::env::var(key).ok())
}

/// POSIX lookup order; `C` and `POSIX` carry no date convention.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn locale_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
