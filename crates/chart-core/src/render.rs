// File: crates/chart-core/src/render.rs
// Summary: Frame drawing: title, plot area, grid, ticks, traces, decorations and legend.

use skia_safe as skia;

use crate::annotation::Layer;
use crate::axis::{Axis, AxisKind, Tick};
use crate::chart::{Chart, RenderOptions};
use crate::geometry::RectF;
use crate::legend::{draw_legend, LegendEntry, LegendPosition, Swatch};
use crate::scale::{AxisScale, BandScale, ScaleTransform, ValueScale};
use crate::series::{Marker, MarkerSymbol, Series, SeriesType, TextPosition};
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::YAxisRef;
use crate::view::ViewState;

/// Fraction of a category band covered by a group of bars.
const BAR_GROUP_FILL: f32 = 0.8;
/// Room right of the plot taken by secondary-axis tick labels.
const Y2_RESERVE: f32 = 48.0;

/// Everything a drawing routine needs besides its own data.
pub(crate) struct DrawCtx<'a> {
    pub canvas: &'a skia::Canvas,
    /// `None` when labels are disabled.
    pub text: Option<&'a TextShaper>,
    pub theme: &'a Theme,
}

pub(crate) fn draw_chart(chart: &Chart, canvas: &skia::Canvas, opts: &RenderOptions) {
    let shaper = opts.draw_labels.then(TextShaper::new);
    let ctx = DrawCtx { canvas, text: shaper.as_ref(), theme: &opts.theme };
    let plot = RectF::inset(opts.width, opts.height, &opts.insets);

    draw_title(&ctx, &chart.title, opts);

    if let Some(pie) = &chart.pie {
        pie.draw(&ctx, plot);
        let entries: Vec<LegendEntry> = pie
            .slices()
            .iter()
            .map(|s| LegendEntry {
                label: pie.labels.get(s.index).cloned().unwrap_or_default(),
                swatch: Swatch::Box(ctx.theme.trace_color(s.index)),
            })
            .collect();
        draw_legend(&ctx, &entries, chart.legend, plot, 0.0);
        return;
    }

    let view = ViewState::from_chart(chart);
    let x_cats = chart.x_categories();
    let y_cats = chart.y_categories();
    let xs = axis_scale(&chart.x_axis, view.x_range(), plot.left, plot.right, x_cats.len());
    let ys = axis_scale(&chart.y_axis, view.y_range(), plot.bottom, plot.top, y_cats.len());
    let y2s = view.y2.map(|(lo, hi)| AxisScale::Value(ValueScale::new_linear(plot.bottom, plot.top, lo, hi)));

    let mut bg = skia::Paint::default();
    bg.set_color(chart.plot_background.unwrap_or(ctx.theme.plot_background));
    canvas.draw_rect(plot.to_skia(), &bg);

    for shape in chart.shapes.iter().filter(|s| s.layer == Layer::Below) {
        shape.draw(&ctx, &xs, &ys);
    }

    let x_ticks = chart.x_axis.ticks(view.x_range(), &x_cats);
    let y_ticks = chart.y_axis.ticks(view.y_range(), &y_cats);
    draw_grid(&ctx, plot, &chart.x_axis, &x_ticks, &xs, &chart.y_axis, &y_ticks, &ys);

    if let (Some(h), Some(bx), Some(by)) = (&chart.heatmap, xs.band(), ys.band()) {
        h.draw(&ctx, bx, by);
    }

    let scale_for = |s: &Series| -> AxisScale {
        match (s.y_axis, y2s) {
            (YAxisRef::Secondary, Some(y2)) => y2,
            _ => ys,
        }
    };

    let bar_count = chart.series.iter().filter(|s| s.series_type == SeriesType::Bar).count();
    let mut bar_slot = 0;
    for (i, s) in chart.series.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| ctx.theme.trace_color(i));
        let sy = scale_for(s);
        match s.series_type {
            SeriesType::Bar => {
                draw_bars(&ctx, s, color, &xs, &sy, &x_cats, plot, bar_slot, bar_count);
                bar_slot += 1;
            }
            SeriesType::Line | SeriesType::Markers => draw_xy(&ctx, s, color, &xs, &sy, &x_cats),
        }
    }

    for shape in chart.shapes.iter().filter(|s| s.layer == Layer::Above) {
        shape.draw(&ctx, &xs, &ys);
    }
    for a in &chart.annotations {
        a.draw(&ctx, &xs, &ys);
    }

    draw_x_ticks(&ctx, plot, &chart.x_axis, &x_ticks, &xs);
    draw_y_ticks(&ctx, plot, &chart.y_axis, &y_ticks, &ys, false);
    if let (Some(axis), Some(range), Some(scale)) = (&chart.y2_axis, view.y2, y2s.as_ref()) {
        let ticks = axis.ticks(range, &[]);
        draw_y_ticks(&ctx, plot, axis, &ticks, scale, true);
    }
    draw_axis_titles(&ctx, chart, opts, plot);

    if chart.legend != LegendPosition::Hidden {
        let entries = legend_entries(chart, ctx.theme);
        let reserve = if y2s.is_some() { Y2_RESERVE } else { 0.0 };
        draw_legend(&ctx, &entries, chart.legend, plot, reserve);
    }
}

fn axis_scale(axis: &Axis, range: (f64, f64), start: f32, end: f32, n_cats: usize) -> AxisScale {
    match axis.kind {
        AxisKind::Category => AxisScale::Band(BandScale::new(start, end, n_cats)),
        AxisKind::Linear | AxisKind::Date => AxisScale::Value(ValueScale::new_linear(start, end, range.0, range.1)),
    }
}

/// Legend rows for every named series.
pub fn legend_entries(chart: &Chart, theme: &Theme) -> Vec<LegendEntry> {
    chart
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.name.is_empty())
        .map(|(i, s)| {
            let color = s.color.unwrap_or_else(|| theme.trace_color(i));
            let swatch = match s.series_type {
                SeriesType::Line => Swatch::Line { color, marker: s.marker.is_some() },
                SeriesType::Bar => Swatch::Box(color),
                SeriesType::Markers => Swatch::Dot(s.marker.and_then(|m| m.color).unwrap_or(color)),
            };
            LegendEntry { label: s.name.clone(), swatch }
        })
        .collect()
}

fn draw_title(ctx: &DrawCtx, title: &str, opts: &RenderOptions) {
    let Some(shaper) = ctx.text else { return };
    if title.is_empty() { return; }
    let spec = TextSpec::new(ctx.theme.title_size, ctx.theme.title);
    shaper.draw(ctx.canvas, title, opts.width as f32 * 0.05, 14.0, &spec, HAlign::Left, VAlign::Top);
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    ctx: &DrawCtx,
    plot: RectF,
    x_axis: &Axis,
    x_ticks: &[Tick],
    xs: &AxisScale,
    y_axis: &Axis,
    y_ticks: &[Tick],
    ys: &AxisScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    if x_axis.show_grid {
        paint.set_color(x_axis.grid_color.unwrap_or(ctx.theme.grid));
        for t in x_ticks {
            let x = xs.to_px(t.value);
            ctx.canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    if y_axis.show_grid {
        paint.set_color(y_axis.grid_color.unwrap_or(ctx.theme.grid));
        for t in y_ticks {
            let y = ys.to_px(t.value);
            ctx.canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
    // zero line on value axes that cross zero
    if let AxisScale::Value(s) = ys {
        if s.vmin < 0.0 && s.vmax > 0.0 {
            paint.set_color(ctx.theme.zero_line);
            paint.set_stroke_width(1.5);
            let y = s.to_px(0.0);
            ctx.canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_bars(
    ctx: &DrawCtx,
    s: &Series,
    color: skia::Color,
    xs: &AxisScale,
    ys: &AxisScale,
    cats: &[String],
    plot: RectF,
    slot: usize,
    slots: usize,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    let spec = TextSpec::new(s.text_size.unwrap_or(ctx.theme.font_size), s.text_color.unwrap_or(ctx.theme.tick));
    let y0 = ys.to_px(0.0);
    for (i, x, y) in s.points(cats) {
        let (left, right) = match xs.band() {
            Some(band) => band.slot(x.round().max(0.0) as usize, slot, slots, BAR_GROUP_FILL),
            None => {
                let w = plot.width() / s.len().max(1) as f32 * BAR_GROUP_FILL / slots.max(1) as f32;
                let cx = xs.to_px(x) - w * slots as f32 * 0.5 + w * (slot as f32 + 0.5);
                (cx - w * 0.5, cx + w * 0.5)
            }
        };
        let top = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(left, top.min(y0), right, top.max(y0));
        ctx.canvas.draw_rect(rect, &fill);

        if let (Some(shaper), Some(label)) = (ctx.text, s.text.get(i)) {
            let cx = (left + right) * 0.5;
            match s.text_position {
                TextPosition::Center => {
                    shaper.draw(ctx.canvas, label, cx, (top + y0) * 0.5, &spec, HAlign::Center, VAlign::Middle)
                }
                _ if y >= 0.0 => shaper.draw(ctx.canvas, label, cx, top - 3.0, &spec, HAlign::Center, VAlign::Bottom),
                _ => shaper.draw(ctx.canvas, label, cx, top + 3.0, &spec, HAlign::Center, VAlign::Top),
            }
        }
    }
}

fn draw_xy(ctx: &DrawCtx, s: &Series, color: skia::Color, xs: &AxisScale, ys: &AxisScale, cats: &[String]) {
    let pts: Vec<(usize, f32, f32)> = s
        .points(cats)
        .into_iter()
        .filter(|(_, _, y)| y.is_finite())
        .map(|(i, x, y)| (i, xs.to_px(x), ys.to_px(y)))
        .collect();

    if s.series_type == SeriesType::Line && pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to((pts[0].1, pts[0].2));
        for &(_, x, y) in pts.iter().skip(1) {
            path.line_to((x, y));
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(s.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(color);
        ctx.canvas.draw_path(&path, &stroke);
    }

    if let Some(m) = &s.marker {
        for &(_, x, y) in &pts {
            draw_marker(ctx.canvas, m, color, x, y);
        }
    }

    let Some(shaper) = ctx.text else { return };
    let spec = TextSpec::new(s.text_size.unwrap_or(ctx.theme.font_size), s.text_color.unwrap_or(ctx.theme.tick));
    let r = s.marker.map(|m| m.size * 0.5).unwrap_or(0.0);
    for &(i, x, y) in &pts {
        let Some(label) = s.text.get(i) else { continue };
        match s.text_position {
            TextPosition::Above => shaper.draw(ctx.canvas, label, x, y - r - 3.0, &spec, HAlign::Center, VAlign::Bottom),
            TextPosition::Right => shaper.draw(ctx.canvas, label, x + r + 4.0, y, &spec, HAlign::Left, VAlign::Middle),
            TextPosition::Center => shaper.draw(ctx.canvas, label, x, y, &spec, HAlign::Center, VAlign::Middle),
        }
    }
}

fn marker_path(symbol: MarkerSymbol, x: f32, y: f32, r: f32) -> skia::Path {
    let mut path = skia::Path::new();
    match symbol {
        MarkerSymbol::Circle => {
            path.add_circle((x, y), r, None);
        }
        MarkerSymbol::Square => {
            path.add_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), None);
        }
    }
    path
}

fn draw_marker(canvas: &skia::Canvas, m: &Marker, color: skia::Color, x: f32, y: f32) {
    let path = marker_path(m.symbol, x, y, m.size * 0.5);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(m.color.unwrap_or(color));
    canvas.draw_path(&path, &fill);
    if let Some((w, c)) = m.outline {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(w);
        stroke.set_color(c);
        canvas.draw_path(&path, &stroke);
    }
}

fn tick_spec(ctx: &DrawCtx, axis: &Axis) -> TextSpec {
    TextSpec::new(axis.tick_font_size.unwrap_or(ctx.theme.font_size), axis.color.unwrap_or(ctx.theme.tick))
}

fn draw_x_ticks(ctx: &DrawCtx, plot: RectF, axis: &Axis, ticks: &[Tick], xs: &AxisScale) {
    let Some(shaper) = ctx.text else { return };
    let spec = tick_spec(ctx, axis);
    for t in ticks {
        let x = xs.to_px(t.value);
        if axis.tick_angle.abs() < 0.5 {
            shaper.draw(ctx.canvas, &t.label, x, plot.bottom + 6.0, &spec, HAlign::Center, VAlign::Top);
        } else {
            let h = if axis.tick_angle > 0.0 { HAlign::Left } else { HAlign::Right };
            shaper.draw_rotated(ctx.canvas, &t.label, x, plot.bottom + 8.0, &spec, axis.tick_angle, h, VAlign::Middle);
        }
    }
}

fn draw_y_ticks(ctx: &DrawCtx, plot: RectF, axis: &Axis, ticks: &[Tick], ys: &AxisScale, right: bool) {
    let Some(shaper) = ctx.text else { return };
    let spec = tick_spec(ctx, axis);
    for t in ticks {
        let y = ys.to_px(t.value);
        if right {
            shaper.draw(ctx.canvas, &t.label, plot.right + 6.0, y, &spec, HAlign::Left, VAlign::Middle);
        } else {
            shaper.draw(ctx.canvas, &t.label, plot.left - 6.0, y, &spec, HAlign::Right, VAlign::Middle);
        }
    }
}

fn draw_axis_titles(ctx: &DrawCtx, chart: &Chart, opts: &RenderOptions, plot: RectF) {
    let Some(shaper) = ctx.text else { return };
    let size = ctx.theme.font_size + 2.0;
    let (cx, cy) = plot.center();

    if !chart.x_axis.title.is_empty() {
        let spec = TextSpec::new(size, chart.x_axis.color.unwrap_or(ctx.theme.axis_label));
        shaper.draw(ctx.canvas, &chart.x_axis.title, cx, opts.height as f32 - 10.0, &spec, HAlign::Center, VAlign::Bottom);
    }
    if !chart.y_axis.title.is_empty() {
        let spec = TextSpec::new(size, chart.y_axis.color.unwrap_or(ctx.theme.axis_label));
        shaper.draw_rotated(ctx.canvas, &chart.y_axis.title, 16.0, cy, &spec, -90.0, HAlign::Center, VAlign::Top);
    }
    if let Some(y2) = chart.y2_axis.as_ref().filter(|_| chart.uses_y2()) {
        if !y2.title.is_empty() {
            let spec = TextSpec::new(size, y2.color.unwrap_or(ctx.theme.axis_label));
            let x = (plot.right + Y2_RESERVE + 8.0).min(opts.width as f32 - 16.0);
            shaper.draw_rotated(ctx.canvas, &y2.title, x, cy, &spec, 90.0, HAlign::Center, VAlign::Top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use crate::series::XData;

    #[test]
    fn every_named_series_gets_a_legend_row() {
        let theme = Theme::report();
        let mut chart = Chart::new();
        let x = || XData::categories(["a", "b"]);
        chart.add_series(Series::bar("Clicks", x(), vec![1.0, 2.0]));
        chart.add_series(Series::line("", x(), vec![1.0, 2.0]));
        chart.add_series(Series::line("CTR", x(), vec![3.0, 4.0]).with_color(rgb(0xFFC185)).with_marker(Marker::square(7.0)));
        chart.add_series(Series::markers("Wins", x(), vec![1.0, 1.0]));

        let entries = legend_entries(&chart, &theme);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Clicks", "CTR", "Wins"]);
        assert_eq!(entries[0].swatch, Swatch::Box(theme.trace_color(0)));
        assert_eq!(entries[1].swatch, Swatch::Line { color: rgb(0xFFC185), marker: true });
        assert_eq!(entries[2].swatch, Swatch::Dot(theme.trace_color(3)));
    }
}
