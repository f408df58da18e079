// File: crates/report-charts/src/charts/trends.rs
// Summary: Dual-axis traffic trends: sessions on the left, bounce rate and scaled duration on the right.

use chart_core::{Axis, Chart, Color, LegendPosition, Series, XData, YAxisRef};
use report_data::{TrafficTrends, TrendDay};

use super::{CYAN, GREEN, RED};

pub fn chart(data: &TrafficTrends) -> Chart {
    let mut chart = Chart::titled("Website Traffic Trends");
    chart.x_axis = Axis::date("Date").with_grid_color(Color::from_argb(51, 128, 128, 128));
    chart.y_axis = Axis::linear("Sessions").with_color(CYAN);
    chart.y2_axis = Some(Axis::linear("Rate % / Duration").with_color(RED).with_grid(false));
    chart.legend = LegendPosition::TopCenter;

    let dates = || XData::Date(data.rows.iter().map(|r| r.date).collect());
    let hover = |f: fn(&TrendDay) -> String| data.rows.iter().map(f).collect::<Vec<_>>();

    chart.add_series(
        Series::line("Sessions", dates(), data.rows.iter().map(|r| r.sessions as f64).collect())
            .with_color(CYAN)
            .with_line_width(3.0)
            .with_hover(hover(|r| format!("Sessions\nDate: {}\nSessions: {}", r.date, r.sessions))),
    );
    chart.add_series(
        Series::line("Bounce Rate %", dates(), data.rows.iter().map(|r| r.bounce_rate).collect())
            .with_color(RED)
            .on_axis(YAxisRef::Secondary)
            .with_hover(hover(|r| format!("Bounce Rate\nDate: {}\nRate: {:.1}%", r.date, r.bounce_rate))),
    );
    chart.add_series(
        Series::line("Avg Duration", dates(), data.rows.iter().map(|r| r.scaled_duration()).collect())
            .with_color(GREEN)
            .on_axis(YAxisRef::Secondary)
            .with_hover(hover(|r| format!("Avg Duration\nDate: {}\nDuration: {:.0}s", r.date, r.duration_sec))),
    );
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::ViewState;

    #[test]
    fn spike_sits_on_primary_and_rates_on_secondary() {
        let data = report_data::traffic_trends().unwrap();
        let chart = chart(&data);
        assert!(chart.uses_y2());
        let v = ViewState::from_chart(&chart);
        let spike = data.spike().unwrap().sessions as f64;
        assert!(v.y_max >= spike);
        let (lo2, hi2) = v.y2.unwrap();
        let secondary: Vec<f64> =
            data.rows.iter().flat_map(|r| [r.bounce_rate, r.scaled_duration()]).collect();
        assert!(secondary.iter().all(|y| (lo2..=hi2).contains(y)));
        // rates never stretch to the session scale
        assert!(hi2 < 200.0);
    }
}
