use crate::analysis::rank::RankedReturns;
use crate::render::html::escape;

const WIDTH: f64 = 576.0;
const LEFT: f64 = 132.0;
const RIGHT: f64 = 24.0;
const TOP: f64 = 36.0;
const BOTTOM: f64 = 48.0;
const BAR_SLOT: f64 = 36.0;
const BAR_HEIGHT: f64 = 22.0;
const TICKS: usize = 5;

pub const BEST_COLOR: &str = "#FFD700";
pub const BAR_COLOR: &str = "#87CEEB";
const GRID_COLOR: &str = "#bbbbbb";
const TEXT_COLOR: &str = "#333";

/// Horizontal bar chart of returns in percent, best entry first and highlighted.
pub fn bar_chart_svg(ranked: &RankedReturns) -> String {
    let entries = ranked.entries();
    if entries.is_empty() {
        return String::new();
    }

    let values: Vec<f64> = entries.iter().map(|e| e.value * 100.0).collect();
    let (min_v, max_v) = extent(&values);

    let plot_w = WIDTH - LEFT - RIGHT;
    let height = TOP + BOTTOM + BAR_SLOT * entries.len() as f64;
    let plot_bottom = height - BOTTOM;
    let x = |v: f64| LEFT + (v - min_v) / (max_v - min_v) * plot_w;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="returns-chart" viewBox="0 0 {w} {h:.0}" width="100%" role="img" aria-label="Crypto returns over the last 24h" font-family="sans-serif" font-size="11">"#,
        w = WIDTH,
        h = height
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="20" text-anchor="middle" font-size="13" fill="{TEXT_COLOR}">Crypto returns over the last 24h</text>"#,
        x = WIDTH / 2.0
    ));

    for i in 0..TICKS {
        let v = min_v + (max_v - min_v) * i as f64 / (TICKS - 1) as f64;
        let gx = x(v);
        svg.push_str(&format!(
            r#"<line x1="{gx:.2}" y1="{TOP:.2}" x2="{gx:.2}" y2="{plot_bottom:.2}" stroke="{GRID_COLOR}" stroke-width="0.5" stroke-dasharray="4 3" />"#
        ));
        svg.push_str(&format!(
            r#"<text x="{gx:.2}" y="{y:.2}" text-anchor="middle" fill="{TEXT_COLOR}">{v:.2}%</text>"#,
            y = plot_bottom + 14.0
        ));
    }

    for (i, (entry, &v)) in entries.iter().zip(&values).enumerate() {
        let y = TOP + BAR_SLOT * i as f64 + (BAR_SLOT - BAR_HEIGHT) / 2.0;
        let (x0, x1) = if v >= 0.0 { (x(0.0), x(v)) } else { (x(v), x(0.0)) };
        let color = if i == 0 { BEST_COLOR } else { BAR_COLOR };
        svg.push_str(&format!(
            r#"<rect x="{x0:.2}" y="{y:.2}" width="{w:.2}" height="{BAR_HEIGHT:.2}" fill="{color}"><title>{name}: {v:.2}%</title></rect>"#,
            w = (x1 - x0).max(1.0),
            name = escape(&entry.name)
        ));
        svg.push_str(&format!(
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="end" fill="{TEXT_COLOR}">{name}</text>"#,
            lx = LEFT - 6.0,
            ly = y + BAR_HEIGHT / 2.0 + 4.0,
            name = escape(&entry.name)
        ));
    }

    let zero = x(0.0);
    svg.push_str(&format!(
        r#"<line x1="{zero:.2}" y1="{TOP:.2}" x2="{zero:.2}" y2="{plot_bottom:.2}" stroke="{TEXT_COLOR}" stroke-width="1" />"#
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" fill="{TEXT_COLOR}">Return (%)</text>"#,
        x = LEFT + plot_w / 2.0,
        y = height - 10.0
    ));
    svg.push_str(&format!(
        r#"<text x="14" y="{y:.2}" text-anchor="middle" fill="{TEXT_COLOR}" transform="rotate(-90 14 {y:.2})">Cryptocurrency</text>"#,
        y = TOP + (plot_bottom - TOP) / 2.0
    ));
    svg.push_str("</svg>");
    svg
}

/// Value range including zero, widened when flat.
fn extent(values: &[f64]) -> (f64, f64) {
    let mut min_v = values.iter().copied().fold(0.0_f64, f64::min);
    let mut max_v = values.iter().copied().fold(0.0_f64, f64::max);
    if min_v == max_v {
        min_v -= 1.0;
        max_v += 1.0;
    }
    (min_v, max_v)
}
