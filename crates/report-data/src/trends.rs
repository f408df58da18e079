// File: crates/report-data/src/trends.rs
// Summary: Seeded synthetic daily traffic trends with an injected spike on 2024-09-03.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{Error, Result};
use crate::table::Table;

pub const SEED: u64 = 42;

const SESSIONS_MEAN: f64 = 1000.0;
const SESSIONS_SD: f64 = 200.0;
const SPIKE_FACTOR: f64 = 2.5;
const BOUNCE_MEAN: f64 = 45.0;
const BOUNCE_SD: f64 = 10.0;
const BOUNCE_CLIP: (f64, f64) = (20.0, 80.0);
const DURATION_MEAN: f64 = 180.0;
const DURATION_SD: f64 = 30.0;
const DURATION_CLIP: (f64, f64) = (120.0, 300.0);
/// Duration is divided by this before sharing the rate axis.
pub const DURATION_DIVISOR: f64 = 3.0;

const FIRST_DAY: &str = "2024-08-20";
const LAST_DAY: &str = "2024-09-10";
const SPIKE_DAY: &str = "2024-09-03";

fn day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| Error::Date { input: raw.to_string(), source })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendDay {
    pub date: NaiveDate,
    pub sessions: i64,
    pub bounce_rate: f64,
    pub duration_sec: f64,
}

impl TrendDay {
    pub fn scaled_duration(&self) -> f64 {
        self.duration_sec / DURATION_DIVISOR
    }
}

#[derive(Clone, Debug)]
pub struct TrafficTrends {
    pub seed: u64,
    pub spike_date: NaiveDate,
    pub rows: Vec<TrendDay>,
}

impl TrafficTrends {
    pub fn spike(&self) -> Option<&TrendDay> {
        self.rows.iter().find(|r| r.date == self.spike_date)
    }
}

fn normal(rng: &mut StdRng, mean: f64, sd: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| mean + sd * rng.sample::<f64, _>(StandardNormal)).collect()
}

/// Draw the three series (sessions, bounce, duration, in that order) from one seeded stream.
pub fn generate(seed: u64) -> Result<TrafficTrends> {
    let (first, last, spike_date) = (day(FIRST_DAY)?, day(LAST_DAY)?, day(SPIKE_DAY)?);
    let dates: Vec<NaiveDate> = first.iter_days().take_while(|d| *d <= last).collect();
    let n = dates.len();
    let spike = dates.iter().position(|d| *d == spike_date).ok_or(Error::MissingDate(spike_date))?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sessions = normal(&mut rng, SESSIONS_MEAN, SESSIONS_SD, n);
    let bounce = normal(&mut rng, BOUNCE_MEAN, BOUNCE_SD, n);
    let duration = normal(&mut rng, DURATION_MEAN, DURATION_SD, n);
    sessions[spike] *= SPIKE_FACTOR;

    let rows = dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| TrendDay {
            date,
            sessions: sessions[i].trunc() as i64,
            bounce_rate: bounce[i].clamp(BOUNCE_CLIP.0, BOUNCE_CLIP.1),
            duration_sec: duration[i].clamp(DURATION_CLIP.0, DURATION_CLIP.1),
        })
        .collect();
    Ok(TrafficTrends { seed, spike_date, rows })
}

pub fn traffic_trends() -> Result<TrafficTrends> {
    generate(SEED)
}

impl Table for TrafficTrends {
    fn headers(&self) -> Vec<&'static str> {
        vec!["date", "sessions", "bounce_rate", "avg_duration_sec", "avg_duration_scaled"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.sessions.to_string(),
                    format!("{:.2}", r.bounce_rate),
                    format!("{:.2}", r.duration_sec),
                    format!("{:.2}", r.scaled_duration()),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_twenty_two_days() {
        let t = traffic_trends().unwrap();
        assert_eq!(t.rows.len(), 22);
        assert_eq!(t.rows[0].date, NaiveDate::from_ymd_opt(2024, 8, 20).unwrap());
        assert_eq!(t.rows[21].date, NaiveDate::from_ymd_opt(2024, 9, 10).unwrap());
        assert_eq!(t.spike().map(|r| r.date), NaiveDate::from_ymd_opt(2024, 9, 3));
        assert!(t.rows.windows(2).all(|w| w[0].date.succ_opt() == Some(w[1].date)));
    }

    #[test]
    fn same_seed_same_rows() {
        let a = traffic_trends().unwrap();
        let b = generate(SEED).unwrap();
        assert_eq!(a.seed, 42);
        assert_eq!(a.rows, b.rows);
        let c = generate(SEED + 1).unwrap();
        assert_ne!(a.rows, c.rows);
    }

    #[test]
    fn bad_date_literal_is_an_error() {
        assert!(matches!(day("2024-02-30"), Err(Error::Date { .. })));
        assert_eq!(day(SPIKE_DAY).unwrap(), NaiveDate::from_ymd_opt(2024, 9, 3).unwrap());
    }

    #[test]
    fn clipping_holds() {
        for seed in 0..20 {
            let t = generate(seed).unwrap();
            for r in &t.rows {
                assert!((20.0..=80.0).contains(&r.bounce_rate));
                assert!((120.0..=300.0).contains(&r.duration_sec));
                assert!((40.0..=100.0).contains(&r.scaled_duration()));
            }
        }
    }

    #[test]
    fn spike_is_scaled_before_truncation() {
        // rebuild the raw draw and compare against the stored integer
        let t = generate(SEED).unwrap();
        let mut rng = StdRng::seed_from_u64(SEED);
        let raw = normal(&mut rng, SESSIONS_MEAN, SESSIONS_SD, t.rows.len());
        let idx = t.rows.iter().position(|r| r.date == t.spike_date).unwrap();
        assert_eq!(t.spike().unwrap().sessions, (raw[idx] * SPIKE_FACTOR).trunc() as i64);
        assert_eq!(t.rows[0].sessions, raw[0].trunc() as i64);
    }
}
