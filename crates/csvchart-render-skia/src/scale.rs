// File: crates/csvchart-render-skia/src/scale.rs
// Summary: Data ranges and linear data-to-pixel transforms.

/// Linear map from a data interval onto a pixel interval.
/// The pixel interval may be reversed (Y grows downwards on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub dmin: f64,
    pub dmax: f64,
    pub pmin: f32,
    pub pmax: f32,
}

impl LinearScale {
    pub fn new(dmin: f64, dmax: f64, pmin: f32, pmax: f32) -> Self {
        let mut s = Self { dmin, dmax, pmin, pmax };
        if (s.dmax - s.dmin).abs() < 1e-12 { s.dmax = s.dmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.dmin) / (self.dmax - self.dmin);
        self.pmin + t as f32 * (self.pmax - self.pmin)
    }
}

/// Padded `(min, max)` over the finite values, or `(0, 1)` when there are none.
/// With `include_zero` the range always reaches zero, as bars grow from it.
pub fn value_range(values: impl IntoIterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if (hi - lo).abs() < 1e-9 {
        lo -= 0.5;
        hi += 0.5;
    }
    let margin = (hi - lo) * 0.05;
    let lo = if include_zero && lo == 0.0 { 0.0 } else { lo - margin };
    let hi = if include_zero && hi == 0.0 { 0.0 } else { hi + margin };
    (lo, hi)
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick label with precision chosen from the visible span.
pub fn format_tick(v: f64, span: f64) -> String {
    let v = if v.abs() < 1e-12 { 0.0 } else { v };
    if span >= 50.0 {
        format!("{:.0}", v)
    } else if span >= 5.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}
