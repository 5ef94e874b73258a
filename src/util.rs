// Small helpers shared across components.

/// Wall-clock milliseconds, used to timestamp stroke segments.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn format_fade_duration(ms: u32) -> String {
    format!("{:.1}s", f64::from(ms) / 1000.0)
}
