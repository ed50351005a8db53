//! Metric dates, date filtering and pt-BR display formatting.
//!
//! Dates are shown and compared in the local display format `DD/MM/YYYY`.
//! The `<input type="date">` speaks ISO `YYYY-MM-DD`, so the filter converts
//! between the two.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::DashboardMetric;

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Shown in place of a metric date that could not be read.
pub const INVALID_DATE_LABEL: &str = "Data inválida";

/// `2024-02-01` → `01/02/2024`.  Anything that is not a calendar date yields
/// `None`.
pub fn iso_to_display(iso: &str) -> Option<String> {
    NaiveDate::parse_from_str(iso.trim(), ISO_DATE_FORMAT)
        .ok()
        .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
}

/// `01/02/2024` → `2024-02-01`.
pub fn display_to_iso(display: &str) -> Option<String> {
    NaiveDate::parse_from_str(display.trim(), DISPLAY_DATE_FORMAT)
        .ok()
        .map(|d| d.format(ISO_DATE_FORMAT).to_string())
}

pub fn format_display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

impl DashboardMetric {
    pub fn display_date(&self) -> String {
        self.date
            .as_ref()
            .map(format_display_date)
            .unwrap_or_else(|| INVALID_DATE_LABEL.to_string())
    }
}

/// Metrics whose display date equals `date` exactly.  `None` or an empty
/// string disables the filter.
pub fn filter_by_date<'a>(metrics: &'a [DashboardMetric], date: Option<&str>) -> Vec<&'a DashboardMetric> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(wanted) => metrics
            .iter()
            .filter(|m| m.date.as_ref().map(format_display_date).as_deref() == Some(wanted))
            .collect(),
        None => metrics.iter().collect(),
    }
}

/// Integer with pt-BR thousands separators: `1234567` → `1.234.567`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Interpret a backend timestamp (ISO string with or without offset, or epoch
/// milliseconds) in the browser's local time zone.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Local>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Local.timestamp_millis_opt(ms).single()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Local));
            }
            // Graph API style offset without colon: 2024-02-01T12:00:00+0000
            if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z") {
                return Some(dt.with_timezone(&Local));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Local.from_local_datetime(&naive).earliest();
            }
            None
        }
        _ => None,
    }
}

/// `01/02/2024, 14:03:05`, the pt-BR `toLocaleString` shape.
pub fn format_timestamp(value: &Value) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string())
}

/// Date part only, `01/02/2024`.
pub fn format_timestamp_date(value: &Value) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
}

fn metric_date_from_value(value: &Value) -> Option<NaiveDate> {
    if let Value::String(s) = value {
        if let Ok(d) = NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT) {
            return Some(d);
        }
        if let Ok(d) = NaiveDate::parse_from_str(s.trim(), DISPLAY_DATE_FORMAT) {
            return Some(d);
        }
    }
    parse_timestamp(value).map(|dt| dt.date_naive())
}

/// Lenient: an unreadable date becomes `None` instead of failing the whole
/// metrics list.
pub(crate) fn deserialize_metric_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let date = metric_date_from_value(&raw);
    if date.is_none() {
        debug_log!("Unrecognised metric date: {}", raw);
    }
    Ok(date)
}

pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// File name from a `Content-Disposition` header, e.g.
/// `attachment; filename=relatorio_metricas.csv`.
pub fn attachment_filename(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("filename") {
                Some(value.trim().trim_matches('"').to_string())
            } else {
                None
            }
        })
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn metric(date: &str, views: u64) -> DashboardMetric {
        serde_json::from_value(json!({
            "date": date,
            "type": "LIVE",
            "totalViews": views,
            "totalComments": 1,
            "totalShares": null
        }))
        .unwrap()
    }

    #[test]
    fn filter_by_exact_display_date() {
        let metrics = vec![metric("2024-02-01", 10), metric("2024-02-02", 20)];
        let hits = filter_by_date(&metrics, Some("01/02/2024"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].total_views, 10);

        assert_eq!(filter_by_date(&metrics, None).len(), 2);
        assert_eq!(filter_by_date(&metrics, Some("")).len(), 2);
        assert!(filter_by_date(&metrics, Some("03/02/2024")).is_empty());
    }

    #[test]
    fn input_date_converts_to_display() {
        assert_eq!(iso_to_display("2024-02-01").as_deref(), Some("01/02/2024"));
        assert_eq!(display_to_iso("01/02/2024").as_deref(), Some("2024-02-01"));
        assert_eq!(iso_to_display(""), None);
        assert_eq!(iso_to_display("2024-13-40"), None);
        assert_eq!(display_to_iso("2024-02-01"), None);
    }

    #[test]
    fn metric_dates_accept_backend_shapes() {
        assert_eq!(metric("01/02/2024", 0).display_date(), "01/02/2024");
        assert_eq!(metric("2024-02-01", 0).total_shares, 0);

        // Midday UTC lands on the same calendar day in every inhabited zone.
        let ms = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        let m: DashboardMetric = serde_json::from_value(json!({
            "date": ms, "type": "LIVE", "totalViews": 1, "totalComments": 0, "totalShares": 0
        }))
        .unwrap();
        assert_eq!(m.display_date(), "01/02/2024");
    }

    #[test]
    fn unreadable_dates_keep_the_rest_of_the_list() {
        let metrics: Vec<DashboardMetric> = serde_json::from_value(json!([
            { "date": "2024-02-01", "type": "LIVE", "totalViews": 5 },
            { "date": null, "type": "LIVE", "totalViews": 6 },
            { "date": "ontem", "type": "LIVE", "totalViews": 7 },
            { "type": "LIVE", "totalViews": 8 }
        ]))
        .unwrap();
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics[0].display_date(), "01/02/2024");
        assert!(metrics[1..].iter().all(|m| m.date.is_none()));
        assert_eq!(metrics[2].display_date(), INVALID_DATE_LABEL);

        // Undated rows never match a filter but are listed without one.
        assert_eq!(filter_by_date(&metrics, Some("01/02/2024")).len(), 1);
        assert_eq!(filter_by_date(&metrics, Some(INVALID_DATE_LABEL)).len(), 0);
        assert_eq!(filter_by_date(&metrics, None).len(), 4);
    }

    #[test]
    fn counts_use_dot_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.000");
        assert_eq!(format_count(1_234_567), "1.234.567");
    }

    #[test]
    fn filename_from_content_disposition() {
        assert_eq!(
            attachment_filename("attachment; filename=relatorio_metricas.csv").as_deref(),
            Some("relatorio_metricas.csv")
        );
        assert_eq!(
            attachment_filename("attachment; FILENAME=\"x.csv\"").as_deref(),
            Some("x.csv")
        );
        assert_eq!(attachment_filename("inline"), None);
        assert_eq!(attachment_filename("attachment; filename="), None);
    }

    #[test]
    fn graph_api_timestamps_parse() {
        assert!(parse_timestamp(&json!("2024-02-01T12:00:00+0000")).is_some());
        assert!(parse_timestamp(&json!("2024-02-01T12:00:00.000+00:00")).is_some());
        assert!(parse_timestamp(&json!(null)).is_none());
    }

    proptest! {
        #[test]
        fn iso_display_round_trip(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let iso = format!("{:04}-{:02}-{:02}", y, m, d);
            let display = iso_to_display(&iso).unwrap();
            prop_assert_eq!(display_to_iso(&display), Some(iso));
        }
    }
}
