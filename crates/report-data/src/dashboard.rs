// File: crates/report-data/src/dashboard.rs
// Summary: Search console figures from the board dashboard: per-device performance and recent daily trends.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::table::Table;

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceRow {
    pub device: &'static str,
    pub clicks: u32,
    pub impressions: u32,
    /// Percent.
    pub ctr: f64,
    pub position: f64,
}

#[derive(Clone, Debug)]
pub struct DevicePerformance {
    pub rows: Vec<DeviceRow>,
}

pub fn device_performance() -> DevicePerformance {
    let row = |device, clicks, impressions, ctr, position| DeviceRow { device, clicks, impressions, ctr, position };
    DevicePerformance {
        rows: vec![
            row("Mobile", 67, 931, 7.2, 9.4),
            row("Desktop", 28, 1492, 1.88, 21.85),
            row("Tablet", 1, 14, 7.14, 4.86),
        ],
    }
}

impl Table for DevicePerformance {
    fn headers(&self) -> Vec<&'static str> { vec!["device", "clicks", "impressions", "ctr", "position"] }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.device.to_string(),
                    r.clicks.to_string(),
                    r.impressions.to_string(),
                    r.ctr.to_string(),
                    r.position.to_string(),
                ]
            })
            .collect()
    }
}

/// Newest first, as the dashboard lists them; shown sorted by date.
const RECENT: [(&str, u32, u32, f64); 7] = [
    ("2025-09-07", 1, 86, 1.16),
    ("2025-09-06", 1, 74, 1.35),
    ("2025-09-05", 6, 107, 5.61),
    ("2025-09-04", 1, 71, 1.41),
    ("2025-09-03", 4, 117, 3.42),
    ("2025-09-02", 1, 108, 0.93),
    ("2025-09-01", 3, 74, 4.05),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SearchDay {
    pub date: NaiveDate,
    pub clicks: u32,
    pub impressions: u32,
    pub ctr: f64,
}

impl SearchDay {
    /// Short axis label, "Sep 1".
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

#[derive(Clone, Debug)]
pub struct SearchTrends {
    /// Ascending by date.
    pub rows: Vec<SearchDay>,
}

pub fn search_trends() -> Result<SearchTrends> {
    Ok(SearchTrends { rows: search_days(&RECENT)? })
}

/// Parse `(date, clicks, impressions, ctr)` rows into ascending date order.
fn search_days(raw_rows: &[(&str, u32, u32, f64)]) -> Result<Vec<SearchDay>> {
    let mut rows = raw_rows
        .iter()
        .map(|&(raw, clicks, impressions, ctr)| {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|source| Error::Date { input: raw.to_string(), source })?;
            Ok(SearchDay { date, clicks, impressions, ctr })
        })
        .collect::<Result<Vec<_>>>()?;
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

impl Table for SearchTrends {
    fn headers(&self) -> Vec<&'static str> { vec!["date", "clicks", "impressions", "ctr"] }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.date.to_string(), r.clicks.to_string(), r.impressions.to_string(), r.ctr.to_string()])
            .collect()
    }
}
