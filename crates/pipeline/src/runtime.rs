//! Display formatting for the runtime field.

use datasets::{NOT_AVAILABLE, is_missing};

/// Render a raw runtimeMinutes value for the report.
///
/// `\N`, empty, and unparsable inputs all become `N/A`; numeric input
/// becomes `"{minutes} min"`. Total function, never fails.
pub fn format_runtime(raw: &str) -> String {
    if is_missing(raw) {
        return NOT_AVAILABLE.to_string();
    }
    match raw.trim().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() => format!("{} min", minutes as i64),
        _ => NOT_AVAILABLE.to_string(),
    }
}
