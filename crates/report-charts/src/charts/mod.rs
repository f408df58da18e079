// File: crates/report-charts/src/charts/mod.rs
// Summary: One builder per report chart, turning a dataset into a `Chart`.

use chart_core::{rgb, Color};

pub mod comparison;
pub mod dashboard;
pub mod growth;
pub mod impact;
pub mod sessions;
pub mod sources;
pub mod traffic;
pub mod trends;

pub(crate) const CYAN: Color = rgb(0x1FB8CD);
pub(crate) const PEACH: Color = rgb(0xFFC185);
pub(crate) const RED: Color = rgb(0xDB4545);
pub(crate) const YELLOW: Color = rgb(0xD2BA4C);
pub(crate) const GREEN: Color = rgb(0x2E8B57);
pub(crate) const GRAY: Color = rgb(0x808080);
