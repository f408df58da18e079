// File: crates/report-data/src/features.rs
// Summary: Analytics platform feature ratings (feature × platform) mapped to scores and glyphs.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rating {
    None,
    Limited,
    Basic,
    Partial,
    Full,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::None, Rating::Limited, Rating::Basic, Rating::Partial, Rating::Full];

    /// 0..=3; partial and basic share a rung.
    pub fn score(self) -> u8 {
        match self {
            Rating::None => 0,
            Rating::Limited => 1,
            Rating::Partial | Rating::Basic => 2,
            Rating::Full => 3,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Rating::None => "✗",
            Rating::Limited => "△",
            Rating::Partial | Rating::Basic => "◐",
            Rating::Full => "✓",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::None => "none",
            Rating::Limited => "limited",
            Rating::Basic => "basic",
            Rating::Partial => "partial",
            Rating::Full => "full",
        }
    }

    /// Capitalized status for hover text ("Full", "Limited").
    pub fn title(self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRating(s.to_string()))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Wix,
    GoogleAnalytics,
    Twipla,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Wix, Platform::GoogleAnalytics, Platform::Twipla];

    pub fn full_name(self) -> &'static str {
        match self {
            Platform::Wix => "Wix Analytics",
            Platform::GoogleAnalytics => "Google Analytics",
            Platform::Twipla => "TWIPLA",
        }
    }
}

pub const FEATURES: [&str; 7] = [
    "Built-in Traffic",
    "Search Query Data",
    "Custom Events",
    "Session Replays",
    "User Demographics",
    "Privacy-First",
    "Marketing Attrib",
];

/// One row per feature; columns follow `Platform::ALL`.
const RATINGS: [[&str; 3]; 7] = [
    ["full", "full", "full"],
    ["full", "full", "full"],
    ["partial", "full", "full"],
    ["none", "none", "full"],
    ["partial", "full", "limited"],
    ["partial", "limited", "full"],
    ["basic", "full", "limited"],
];

#[derive(Clone, Debug)]
pub struct FeatureComparison {
    pub features: Vec<&'static str>,
    pub platforms: Vec<Platform>,
    /// `ratings[feature][platform]`.
    pub ratings: Vec<Vec<Rating>>,
}

impl FeatureComparison {
    pub fn scores(&self) -> Vec<Vec<f64>> {
        self.map_cells(|_, _, r| f64::from(r.score()))
    }

    pub fn glyphs(&self) -> Vec<Vec<String>> {
        self.map_cells(|_, _, r| r.glyph().to_string())
    }

    pub fn hover(&self) -> Vec<Vec<String>> {
        self.map_cells(|feature, platform, r| format!("{}\n{}: {}", platform.full_name(), feature, r.title()))
    }

    /// Heatmap column labels, one per platform.
    pub fn platform_labels(&self) -> Vec<String> {
        self.platforms.iter().map(|p| p.full_name().to_string()).collect()
    }

    fn map_cells<T>(&self, f: impl Fn(&str, Platform, Rating) -> T) -> Vec<Vec<T>> {
        self.ratings
            .iter()
            .zip(&self.features)
            .map(|(row, feature)| row.iter().zip(&self.platforms).map(|(r, p)| f(feature, *p, *r)).collect())
            .collect()
    }
}

pub fn feature_comparison() -> Result<FeatureComparison> {
    let ratings = RATINGS
        .iter()
        .map(|row| row.iter().map(|s| s.parse::<Rating>()).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    Ok(FeatureComparison { features: FEATURES.to_vec(), platforms: Platform::ALL.to_vec(), ratings })
}

impl Table for FeatureComparison {
    fn headers(&self) -> Vec<&'static str> {
        vec!["feature", "platform", "rating", "score"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.map_cells(|feature, platform, r| {
            vec![feature.to_string(), platform.full_name().to_string(), r.to_string(), r.score().to_string()]
        })
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_map_onto_four_rungs() {
        let scores: Vec<u8> = Rating::ALL.iter().map(|r| r.score()).collect();
        assert_eq!(scores, vec![0, 1, 2, 2, 3]);
        assert_eq!(Rating::Partial.glyph(), Rating::Basic.glyph());
        assert_eq!(Rating::None.glyph(), "✗");
        assert_eq!(Rating::Full.title(), "Full");
        assert_eq!("Partial".parse::<Rating>().unwrap(), Rating::Partial);
        assert!(matches!("maybe".parse::<Rating>(), Err(Error::UnknownRating(_))));
    }

    #[test]
    fn matrix_is_seven_by_three() {
        let fc = feature_comparison().unwrap();
        let scores = fc.scores();
        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|r| r.len() == 3));
        assert!(scores.iter().flatten().all(|v| (0.0..=3.0).contains(v)));
        // Session Replays: only TWIPLA has it
        assert_eq!(scores[3], vec![0.0, 0.0, 3.0]);
        assert_eq!(fc.glyphs()[6], vec!["◐", "✓", "△"]);
        assert_eq!(fc.platform_labels(), vec!["Wix Analytics", "Google Analytics", "TWIPLA"]);
    }

    #[test]
    fn hover_names_platform_and_status() {
        let fc = feature_comparison().unwrap();
        assert_eq!(fc.hover()[4][2], "TWIPLA\nUser Demographics: Limited");
        assert_eq!(fc.hover()[0][1], "Google Analytics\nBuilt-in Traffic: Full");
        assert_eq!(fc.rows().len(), 21);
    }
}
