// File: crates/report-data/src/traffic.rs
// Summary: Daily website traffic (sessions, bounce rate, duration) parsed from US dates and
// sorted chronologically, with duration converted to minutes.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::table::Table;

/// Newest first, as exported by the analytics dashboard.
const DATES: [&str; 10] = [
    "9/9/2025", "9/8/2025", "9/7/2025", "9/6/2025", "9/5/2025",
    "9/4/2025", "9/3/2025", "9/2/2025", "9/1/2025", "8/31/2025",
];
const SESSIONS: [u32; 10] = [11, 9, 5, 7, 14, 12, 17, 7, 13, 8];
const BOUNCE_RATE: [f64; 10] = [91.0, 78.0, 60.0, 57.0, 50.0, 58.0, 65.0, 43.0, 46.0, 50.0];
const DURATION_SEC: [f64; 10] = [763.0, 50.0, 180.0, 305.0, 158.0, 109.0, 164.0, 151.0, 115.0, 86.0];

/// Parse an `m/d/yyyy` date (padding optional).
pub fn parse_us_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y").map_err(|source| Error::Date { input: s.to_string(), source })
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyTraffic {
    pub date: NaiveDate,
    pub sessions: u32,
    /// Percent.
    pub bounce_rate: f64,
    pub duration_sec: f64,
}

impl DailyTraffic {
    pub fn duration_min(&self) -> f64 {
        self.duration_sec / 60.0
    }

    pub fn hover(&self) -> String {
        format!(
            "{}\nSessions: {}\nBounce Rate: {}%\nAvg Duration: {:.1}m",
            self.date.format("%b %d"),
            self.sessions,
            self.bounce_rate,
            self.duration_min()
        )
    }
}

#[derive(Clone, Debug)]
pub struct TrafficAnalysis {
    /// Ascending by date.
    pub rows: Vec<DailyTraffic>,
}

pub fn traffic_analysis() -> Result<TrafficAnalysis> {
    let mut rows = Vec::with_capacity(DATES.len());
    for (i, raw) in DATES.iter().enumerate() {
        rows.push(DailyTraffic {
            date: parse_us_date(raw)?,
            sessions: SESSIONS[i],
            bounce_rate: BOUNCE_RATE[i],
            duration_sec: DURATION_SEC[i],
        });
    }
    rows.sort_by_key(|r| r.date);
    Ok(TrafficAnalysis { rows })
}

impl Table for TrafficAnalysis {
    fn headers(&self) -> Vec<&'static str> {
        vec!["date", "sessions", "bounce_rate", "duration_sec", "duration_min"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.sessions.to_string(),
                    r.bounce_rate.to_string(),
                    r.duration_sec.to_string(),
                    format!("{:.3}", r.duration_min()),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unpadded_dates() {
        assert_eq!(parse_us_date("9/3/2025").unwrap(), NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        assert_eq!(parse_us_date("08/31/2025").unwrap(), NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        assert!(matches!(parse_us_date("31/8/2025"), Err(Error::Date { .. })));
    }

    #[test]
    fn rows_are_chronological_and_complete() {
        let t = traffic_analysis().unwrap();
        assert_eq!(t.rows.len(), DATES.len());
        assert!(t.rows.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(t.rows[0].date, NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        assert_eq!(t.rows[9].date, NaiveDate::from_ymd_opt(2025, 9, 9).unwrap());
        // values travel with their date
        assert_eq!(t.rows[0].sessions, 8);
        assert_eq!(t.rows[9].sessions, 11);
    }

    #[test]
    fn duration_in_minutes() {
        let t = traffic_analysis().unwrap();
        let last = &t.rows[9];
        assert!((last.duration_min() - 763.0 / 60.0).abs() < 1e-12);
        assert!(t.rows.iter().all(|r| (r.duration_min() * 60.0 - r.duration_sec).abs() < 1e-9));
        assert_eq!(last.hover(), "Sep 09\nSessions: 11\nBounce Rate: 91%\nAvg Duration: 12.7m");
    }
}
