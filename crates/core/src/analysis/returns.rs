use crate::domain::series::PriceSeries;

/// Fractional change between the first and last close of `series`.
///
/// `None` when the series is empty, starts at a zero close, or the result is
/// not finite. Callers drop such assets from the ranking.
pub fn compute_return(series: &PriceSeries) -> Option<f64> {
    let first = series.first_close()?;
    let last = series.last_close()?;
    if first == 0.0 {
        return None;
    }

    let r = (last - first) / first;
    r.is_finite().then_some(r)
}

/// Formats a fraction as a percentage with two decimals (`0.0312` -> `3.12%`).
pub fn format_percent(r: f64) -> String {
    format!("{:.2}%", r * 100.0)
}
