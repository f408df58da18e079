// File: crates/report-charts/src/charts/growth.rs
// Summary: Impact/effort scatter with shaded quadrants and quadrant callouts.

use chart_core::{Annotation, Axis, Chart, Color, LegendPosition, Marker, Series, Shape, TextPosition, TextSpec, XData};
use report_data::opportunities::{AXIS_MAX, AXIS_MIN};
use report_data::{GrowthMatrix, Quadrant};

use super::{CYAN, GRAY, GREEN, RED};

const LEVELS: [&str; 4] = ["Low", "Medium", "High", "Max"];

pub fn quadrant_color(q: Quadrant) -> Color {
    match q {
        Quadrant::QuickWins => CYAN,
        Quadrant::MajorProjects => RED,
        Quadrant::FillIns | Quadrant::ThanklessTasks => GREEN,
    }
}

fn level_axis(title: &str) -> Axis {
    let values = (1..=LEVELS.len()).map(|v| v as f64).collect();
    Axis::new(title, AXIS_MIN, AXIS_MAX).with_ticks(values, LEVELS.iter().map(|s| s.to_string()).collect())
}

pub fn chart(data: &GrowthMatrix) -> Chart {
    let mut chart = Chart::titled("Digital Growth Strategy Matrix");
    chart.x_axis = level_axis("Effort Required");
    chart.y_axis = level_axis("Impact Potential");
    chart.legend = LegendPosition::TopCenter;

    for q in Quadrant::PLOTTED {
        let (e0, i0, e1, i1) = q.region();
        chart.add_shape(Shape::rect(e0, i0, e1, i1, quadrant_color(q)).with_opacity(0.15).below());
    }

    for q in Quadrant::PLOTTED {
        let points = data.by_quadrant(q);
        if points.is_empty() {
            continue;
        }
        let x = XData::Numeric(points.iter().map(|p| p.effort).collect());
        let y = points.iter().map(|p| p.impact).collect();
        chart.add_series(
            Series::markers(q.category_label().replace(", ", "\n"), x, y)
                .with_color(quadrant_color(q))
                .with_marker(Marker::circle(20.0).with_outline(2.0, Color::WHITE))
                .with_text(points.iter().map(|p| p.name.to_string()).collect(), TextPosition::Right)
                .with_text_font(11.0, Color::BLACK),
        );
    }

    for q in Quadrant::PLOTTED {
        let (x, y) = q.callout_anchor();
        chart.add_annotation(
            Annotation::new(x, y, q.callout(), TextSpec::new(12.0, GRAY).bold())
                .with_background(Color::WHITE)
                .with_border(1.0, GRAY),
        );
    }
    chart
}
