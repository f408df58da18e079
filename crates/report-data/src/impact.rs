// File: crates/report-data/src/impact.rs
// Summary: Business impact of features missing from the current platform, grouped by platform.

use crate::table::Table;

/// Legend and group order.
pub const PLATFORM_ORDER: [&str; 3] = ["TWIPLA", "Google Analytics", "Wix Analytics"];

const ROWS: [(&str, &str, u32, &str, &str); 10] = [
    ("TWIPLA", "Session Rec", 23, "Conv Drop Fix", "Identify UX issues causing conversion drops"),
    ("TWIPLA", "Rage Clicks", 31, "Satisfaction", "Fix broken elements, boost satisfaction"),
    ("TWIPLA", "Company ID", 15, "Lead Convert", "Convert anonymous visitors to leads"),
    ("TWIPLA", "Outgoing", 20, "Partnership", "Optimize referral partnerships"),
    ("Google Analytics", "Custom Dims", 35, "Custom Track", "Track business-specific metrics"),
    ("Google Analytics", "Audience Seg", 28, "Ad Targeting", "Create precise user segments for ads"),
    ("Google Analytics", "Attribution", 40, "Journey Map", "See full customer journey impact"),
    ("Google Analytics", "Cross-Platform", 45, "Unified View", "Connect website, app, offline data"),
    ("Wix Analytics", "Zero Setup", 10, "Hours Saved", "Save 10+ hours setup time"),
    ("Wix Analytics", "Integrated", 25, "Quick Decide", "Quick decisions without switching"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureImpact {
    pub platform: &'static str,
    pub feature: &'static str,
    pub value: u32,
    pub impact_type: &'static str,
    pub description: &'static str,
}

impl FeatureImpact {
    /// Hours for time-saving impacts, percent otherwise.
    pub fn label(&self) -> String {
        if self.impact_type.contains("Hours") {
            format!("{}h", self.value)
        } else {
            format!("{}%", self.value)
        }
    }

    pub fn hover(&self) -> String {
        format!("{}\n{}: {}\n{}", self.feature, self.impact_type, self.label(), self.description)
    }
}

#[derive(Clone, Debug)]
pub struct MissingFeatures {
    pub rows: Vec<FeatureImpact>,
}

impl MissingFeatures {
    /// Rows of one platform in input order.
    pub fn by_platform(&self, platform: &str) -> Vec<&FeatureImpact> {
        self.rows.iter().filter(|r| r.platform == platform).collect()
    }

    pub fn features(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.feature).collect()
    }
}

pub fn missing_features_impact() -> MissingFeatures {
    let rows = ROWS
        .iter()
        .map(|&(platform, feature, value, impact_type, description)| FeatureImpact {
            platform,
            feature,
            value,
            impact_type,
            description,
        })
        .collect();
    MissingFeatures { rows }
}

impl Table for MissingFeatures {
    fn headers(&self) -> Vec<&'static str> {
        vec!["platform", "feature", "value", "impact_type", "label", "description"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.platform.to_string(),
                    r.feature.to_string(),
                    r.value.to_string(),
                    r.impact_type.to_string(),
                    r.label(),
                    r.description.to_string(),
                ]
            })
            .collect()
    }
}
