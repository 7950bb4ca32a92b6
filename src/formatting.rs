use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normaliza una fecha W3CDTF de `docProps/core.xml` a `YYYY-MM-DD HH:MM:SS` en UTC.
pub fn format_w3c_datetime(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_utc().format(DISPLAY_FORMAT).to_string());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(datetime.format(DISPLAY_FORMAT).to_string());
        }
    }

    // W3CDTF admite fechas reducidas: `YYYY` y `YYYY-MM`.
    let date = match raw.len() {
        4 => format!("{raw}-01-01"),
        7 => format!("{raw}-01"),
        _ => raw.to_string(),
    };
    NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.format(DISPLAY_FORMAT).to_string())
}
