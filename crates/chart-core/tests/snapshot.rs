// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshots for each trace kind with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes with labels disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{
    rgb, Annotation, Axis, Chart, ColorScale, Heatmap, LegendPosition, Marker, Pie, RenderOptions, Series, Shape,
    TextPosition, TextSpec, XData,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::sized(320, 240, 1.0);
    opts.draw_labels = false; // deterministic across installed fonts
    opts.insets = chart_core::Insets::new(30, 30, 30, 30);
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    bytes
}

#[test]
fn golden_grouped_bars() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Feature");
    chart.y_axis = Axis::new("Impact", 0.0, 50.0);
    chart.legend = LegendPosition::TopCenter;
    chart.add_series(
        Series::bar("A", XData::categories(["f1", "f2"]), vec![23.0, 31.0])
            .with_color(rgb(0x1FB8CD))
            .with_text(vec!["23%".into(), "31%".into()], TextPosition::Above),
    );
    chart.add_series(Series::bar("B", XData::categories(["f3"]), vec![45.0]).with_color(rgb(0xDB4545)));
    write_or_compare("grouped_bars.png", &render(&chart));
}

#[test]
fn golden_heatmap() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Platform").with_grid(false);
    chart.y_axis = Axis::category("Feature").with_grid(false);
    chart.legend = LegendPosition::Hidden;
    chart.heatmap = Some(
        Heatmap::new(
            vec!["p1".into(), "p2".into(), "p3".into()],
            vec!["f1".into(), "f2".into()],
            vec![vec![3.0, 2.0, 0.0], vec![1.0, 3.0, 2.0]],
            ColorScale::new(vec![
                (0.0, rgb(0xDB4545)),
                (0.33, rgb(0xD2BA4C)),
                (0.66, rgb(0x2E8B57)),
                (1.0, rgb(0x1FB8CD)),
            ]),
        )
        .with_gaps(2.0, 2.0),
    );
    write_or_compare("heatmap.png", &render(&chart));
}

#[test]
fn golden_donut() {
    let mut chart = Chart::new();
    chart.pie = Some(Pie::new(["a", "b", "c"], vec![129.0, 40.0, 7.0]).with_hole(0.3));
    write_or_compare("donut.png", &render(&chart));
}

#[test]
fn golden_quadrant_scatter() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Effort", 0.5, 4.5);
    chart.y_axis = Axis::new("Impact", 0.5, 4.5);
    chart.add_shape(Shape::rect(0.5, 2.5, 2.5, 4.5, rgb(0x1FB8CD)).with_opacity(0.15).below());
    chart.add_series(
        Series::markers("pts", XData::Numeric(vec![1.2, 3.7]), vec![4.2, 3.9])
            .with_marker(Marker::circle(20.0).with_outline(2.0, rgb(0xFFFFFF))),
    );
    chart.add_annotation(Annotation::new(1.5, 4.3, "QUICK WINS", TextSpec::new(12.0, rgb(0x808080)).bold()));
    write_or_compare("quadrant_scatter.png", &render(&chart));
}
