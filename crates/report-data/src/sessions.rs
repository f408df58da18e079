// File: crates/report-data/src/sessions.rs
// Summary: Sessions-over-time series (day label, session count).

use crate::table::Table;

const DAYS: [&str; 8] = ["Aug 11", "Aug 15", "Aug 19", "Aug 23", "Aug 27", "Aug 31", "Sep 4", "Sep 8"];
const SESSIONS: [u32; 8] = [8, 15, 20, 12, 18, 10, 20, 19];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCount {
    pub day: &'static str,
    pub sessions: u32,
}

impl SessionCount {
    pub fn hover(&self) -> String {
        format!("{}\nSessions: {}", self.day, self.sessions)
    }
}

/// Rows in the order given; the labels are already chronological.
#[derive(Clone, Debug)]
pub struct SessionsOverTime {
    pub rows: Vec<SessionCount>,
}

pub fn sessions_over_time() -> SessionsOverTime {
    let rows = DAYS
        .iter()
        .zip(SESSIONS)
        .map(|(&day, sessions)| SessionCount { day, sessions })
        .collect();
    SessionsOverTime { rows }
}

impl Table for SessionsOverTime {
    fn headers(&self) -> Vec<&'static str> { vec!["day", "sessions"] }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| vec![r.day.to_string(), r.sessions.to_string()]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_literal_rows_in_order() {
        let s = sessions_over_time();
        assert_eq!(s.rows.len(), DAYS.len());
        assert_eq!(s.rows[0], SessionCount { day: "Aug 11", sessions: 8 });
        assert_eq!(s.rows[7].day, "Sep 8");
        assert_eq!(s.rows.iter().map(|r| r.sessions).max(), Some(20));
        assert_eq!(s.rows[2].hover(), "Aug 19\nSessions: 20");
    }
}
