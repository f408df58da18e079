// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers (nice linear ticks, whole-day date ticks, tick labels).

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let m = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    m * base
}

/// Tick positions inside `[min, max]` with a nice step giving about `target` intervals.
/// Returns the ticks and the step used.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (hi - lo).max(1e-12);
    let step = nice_step(span / target.max(1) as f64);
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    let ticks = (first..=last)
        .map(|k| k as f64 * step)
        .filter(|v| *v >= lo - eps && *v <= hi + eps)
        .collect();
    (ticks, step)
}

/// Whole-day tick positions (in day numbers) covering `[min, max]`.
pub fn day_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    const STEPS: [i64; 7] = [1, 2, 3, 7, 14, 30, 60];
    let span = (max - min).abs().max(1.0);
    let step = STEPS
        .iter()
        .copied()
        .find(|s| span / (*s as f64) <= target.max(1) as f64)
        .unwrap_or(STEPS[STEPS.len() - 1]);
    let first = min.min(max).ceil() as i64;
    let last = min.max(max).floor() as i64;
    (first..=last).step_by(step as usize).map(|d| d as f64).collect()
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 && (step.fract()).abs() < 1e-9 {
        0
    } else {
        let mut d = (-step.log10()).ceil().max(0.0) as usize;
        // 2.5 x 10^n steps need one more digit than the power suggests
        if ((step / 10f64.powi(-(d as i32))) - 2.5).abs() < 1e-9 || (step * 10f64.powi(d as i32)).fract().abs() > 1e-9 {
            d += 1;
        }
        d
    };
    let s = format!("{:.*}", decimals, v);
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_mantissas() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(42.0), 50.0);
    }

    #[test]
    fn nice_ticks_cover_range() {
        let (ticks, step) = nice_ticks(0.0, 50.0, 6);
        assert_eq!(step, 10.0);
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);

        let (ticks, _) = nice_ticks(3.2, 21.7, 5);
        assert!(ticks.iter().all(|t| *t >= 3.2 && *t <= 21.7));
        assert_eq!(ticks.first().copied(), Some(5.0));
    }

    #[test]
    fn day_ticks_are_whole_days() {
        let ticks = day_ticks(10.0, 31.0, 6);
        assert!(ticks.iter().all(|t| t.fract() == 0.0));
        assert_eq!(ticks[0], 10.0);
        assert!(ticks.len() <= 7);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(7.5, 2.5), "7.5");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
