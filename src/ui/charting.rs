/// Compute X (press index) and Y (seconds) bounds for the results chart
pub fn compute_chart_params(times: &[f64]) -> (f64, f64) {
    let mut slowest = 0.0;
    for &t in times {
        if t > slowest {
            slowest = t;
        }
    }
    if slowest <= 0.0 {
        slowest = 1.0;
    }

    let x_max = times.len().max(1) as f64 + 1.0;
    (x_max, slowest * 1.1)
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
