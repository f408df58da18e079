// File: crates/report-data/src/opportunities.rs
// Summary: Growth opportunities scored by impact and effort and partitioned into quadrants.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::table::Table;

pub const AXIS_MIN: f64 = 0.5;
pub const AXIS_MAX: f64 = 4.5;
/// Threshold on both axes; values at or above it count as high.
pub const MIDPOINT: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    QuickWins,
    MajorProjects,
    FillIns,
    ThanklessTasks,
}

impl Quadrant {
    /// Quadrants that carry data, in legend order.
    pub const PLOTTED: [Quadrant; 3] = [Quadrant::QuickWins, Quadrant::MajorProjects, Quadrant::FillIns];

    pub fn classify(impact: f64, effort: f64) -> Self {
        match (impact >= MIDPOINT, effort >= MIDPOINT) {
            (true, false) => Quadrant::QuickWins,
            (true, true) => Quadrant::MajorProjects,
            (false, false) => Quadrant::FillIns,
            (false, true) => Quadrant::ThanklessTasks,
        }
    }

    pub fn category_label(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "High Impact, Low Effort",
            Quadrant::MajorProjects => "High Impact, High Effort",
            Quadrant::FillIns => "Low Impact, Low Effort",
            Quadrant::ThanklessTasks => "Low Impact, High Effort",
        }
    }

    pub fn callout(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "QUICK WINS",
            Quadrant::MajorProjects => "MAJOR PROJECTS",
            Quadrant::FillIns => "FILL-INS",
            Quadrant::ThanklessTasks => "THANKLESS TASKS",
        }
    }

    /// Shaded region as `(effort0, impact0, effort1, impact1)`.
    pub fn region(self) -> (f64, f64, f64, f64) {
        let (lo_e, hi_e) = match self {
            Quadrant::QuickWins | Quadrant::FillIns => (AXIS_MIN, MIDPOINT),
            Quadrant::MajorProjects | Quadrant::ThanklessTasks => (MIDPOINT, AXIS_MAX),
        };
        let (lo_i, hi_i) = match self {
            Quadrant::QuickWins | Quadrant::MajorProjects => (MIDPOINT, AXIS_MAX),
            Quadrant::FillIns | Quadrant::ThanklessTasks => (AXIS_MIN, MIDPOINT),
        };
        (lo_e, lo_i, hi_e, hi_i)
    }

    /// Callout anchor `(effort, impact)` near the outer edge of the region.
    pub fn callout_anchor(self) -> (f64, f64) {
        let (e0, i0, e1, i1) = self.region();
        let impact = if i0 >= MIDPOINT { i1 - 0.2 } else { i0 + 0.2 };
        ((e0 + e1) / 2.0, impact)
    }
}

impl FromStr for Quadrant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Quadrant::QuickWins, Quadrant::MajorProjects, Quadrant::FillIns, Quadrant::ThanklessTasks]
            .into_iter()
            .find(|q| q.category_label() == s.trim())
            .ok_or_else(|| Error::UnknownQuadrant(s.to_string()))
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category_label())
    }
}

const POINTS: [(&str, f64, f64, &str); 9] = [
    ("Reg Forms", 4.2, 1.2, "High Impact, Low Effort"),
    ("Testimonials", 3.8, 1.5, "High Impact, Low Effort"),
    ("Bazaar Promo", 4.0, 1.8, "High Impact, Low Effort"),
    ("Member Portal", 4.3, 4.1, "High Impact, High Effort"),
    ("Gallery Tours", 3.9, 3.7, "High Impact, High Effort"),
    ("Artist Blog", 4.1, 3.4, "High Impact, High Effort"),
    ("Contact Info", 1.3, 1.1, "Low Impact, Low Effort"),
    ("Social Links", 1.6, 1.4, "Low Impact, Low Effort"),
    ("Alt Text", 1.2, 1.7, "Low Impact, Low Effort"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Opportunity {
    pub name: &'static str,
    pub impact: f64,
    pub effort: f64,
    pub quadrant: Quadrant,
}

impl Opportunity {
    pub fn in_bounds(&self) -> bool {
        let r = AXIS_MIN..=AXIS_MAX;
        r.contains(&self.impact) && r.contains(&self.effort)
    }
}

#[derive(Clone, Debug)]
pub struct GrowthMatrix {
    pub points: Vec<Opportunity>,
}

impl GrowthMatrix {
    pub fn by_quadrant(&self, q: Quadrant) -> Vec<&Opportunity> {
        self.points.iter().filter(|p| p.quadrant == q).collect()
    }
}

/// Parses the stated category of every point.
pub fn growth_opportunities() -> Result<GrowthMatrix> {
    let points = POINTS
        .iter()
        .map(|&(name, impact, effort, category)| {
            Ok(Opportunity { name, impact, effort, quadrant: category.parse()? })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(GrowthMatrix { points })
}

impl Table for GrowthMatrix {
    fn headers(&self) -> Vec<&'static str> { vec!["name", "impact", "effort", "category"] }

    fn rows(&self) -> Vec<Vec<String>> {
        self.points
            .iter()
            .map(|p| vec![p.name.to_string(), p.impact.to_string(), p.effort.to_string(), p.quadrant.to_string()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stated_category_matches_coordinates() {
        let m = growth_opportunities().unwrap();
        assert_eq!(m.points.len(), 9);
        for p in &m.points {
            assert!(p.in_bounds(), "{} out of bounds", p.name);
            assert_eq!(Quadrant::classify(p.impact, p.effort), p.quadrant, "{}", p.name);
        }
        let sizes: Vec<usize> = Quadrant::PLOTTED.iter().map(|q| m.by_quadrant(*q).len()).collect();
        assert_eq!(sizes, vec![3, 3, 3]);
    }

    #[test]
    fn midpoint_counts_as_high() {
        assert_eq!(Quadrant::classify(2.5, 2.5), Quadrant::MajorProjects);
        assert_eq!(Quadrant::classify(2.49, 2.5), Quadrant::ThanklessTasks);
    }

    #[test]
    fn regions_tile_the_plot() {
        let area: f64 = [Quadrant::QuickWins, Quadrant::MajorProjects, Quadrant::FillIns, Quadrant::ThanklessTasks]
            .iter()
            .map(|q| {
                let (e0, i0, e1, i1) = q.region();
                (e1 - e0) * (i1 - i0)
            })
            .sum();
        assert!((area - 16.0).abs() < 1e-12);
        assert_eq!(Quadrant::QuickWins.region(), (0.5, 2.5, 2.5, 4.5));
        let close = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9;
        assert!(close(Quadrant::FillIns.callout_anchor(), (1.5, 0.7)));
        assert!(close(Quadrant::MajorProjects.callout_anchor(), (3.5, 4.3)));
    }

    #[test]
    fn unknown_category_fails() {
        assert!(matches!("Medium".parse::<Quadrant>(), Err(Error::UnknownQuadrant(_))));
    }
}
