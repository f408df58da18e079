// File: crates/report-data/src/sources.rs
// Summary: Traffic source session counts.

use crate::table::Table;

const SOURCES: [(&str, u32); 5] = [
    ("Direct", 129),
    ("Google Organic", 127),
    ("Facebook", 40),
    ("Wix Email", 29),
    ("Bing", 7),
];

#[derive(Clone, Debug)]
pub struct TrafficSources {
    pub labels: Vec<&'static str>,
    pub sessions: Vec<u32>,
}

impl TrafficSources {
    pub fn total(&self) -> u32 {
        self.sessions.iter().sum()
    }

    /// Percent of the total per source; empty totals give zeros.
    pub fn shares(&self) -> Vec<f64> {
        let total = f64::from(self.total());
        self.sessions
            .iter()
            .map(|&s| if total > 0.0 { f64::from(s) / total * 100.0 } else { 0.0 })
            .collect()
    }
}

pub fn traffic_sources() -> TrafficSources {
    TrafficSources {
        labels: SOURCES.iter().map(|(l, _)| *l).collect(),
        sessions: SOURCES.iter().map(|(_, s)| *s).collect(),
    }
}

impl Table for TrafficSources {
    fn headers(&self) -> Vec<&'static str> { vec!["source", "sessions", "share"] }

    fn rows(&self) -> Vec<Vec<String>> {
        self.labels
            .iter()
            .zip(&self.sessions)
            .zip(self.shares())
            .map(|((l, s), p)| vec![l.to_string(), s.to_string(), format!("{p:.2}")])
            .collect()
    }
}
