use crate::analysis::returns::format_percent;
use crate::dashboard::view::DashboardView;
use std::fmt::Write;

pub fn render_report(view: &DashboardView) -> String {
    let mut out = String::from("PIREScoin - daily cryptocurrency analysis\n\n");

    match view {
        DashboardView::NoAssets { message } | DashboardView::NoReturns { message } => {
            let _ = writeln!(out, "[warning] {message}");
        }
        DashboardView::Ranked {
            banner,
            ranked,
            recommendation,
            ..
        } => {
            let _ = writeln!(out, "[success] {banner}\n");
            for (i, entry) in ranked.entries().iter().enumerate() {
                let marker = if i == 0 { '*' } else { ' ' };
                let _ = writeln!(
                    out,
                    "{marker} {:>2}. {:<20} {:>10}  {:>8}",
                    i + 1,
                    entry.name,
                    entry.symbol,
                    format_percent(entry.value)
                );
            }

            if let Some(rec) = recommendation {
                let _ = writeln!(out, "\n[{}] {}", rec.level.as_str(), rec.message);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank::{RankedReturn, RankedReturns};
    use crate::dashboard::view::NO_RETURNS_MESSAGE;
    use crate::strategy::recommendation::Recommendation;

    #[test]
    fn lists_ranking_with_best_marked() {
        let ranked = RankedReturns::rank(vec![
            RankedReturn {
                name: "Cardano (ADA)".to_string(),
                symbol: "ADA-USD".to_string(),
                value: 0.0,
            },
            RankedReturn {
                name: "Ethereum (ETH)".to_string(),
                symbol: "ETH-USD".to_string(),
                value: 0.012,
            },
        ]);
        let best = ranked.best().cloned().unwrap();
        let view = DashboardView::Ranked {
            banner: "Best crypto today: Ethereum (ETH) with a return of 1.20%".to_string(),
            recommendation: Some(Recommendation::for_return(&best.name, best.value)),
            best,
            ranked,
        };

        let text = render_report(&view);
        let lines: Vec<_> = text.lines().collect();
        assert!(lines.iter().any(|l| l.starts_with("*  1. Ethereum (ETH)")));
        assert!(lines.iter().any(|l| l.starts_with("   2. Cardano (ADA)")));
        assert!(text.contains("[info] Ethereum (ETH) shows a slight gain."));
    }

    #[test]
    fn warning_only_for_degenerate_views() {
        let view = DashboardView::NoReturns {
            message: NO_RETURNS_MESSAGE.to_string(),
        };
        let text = render_report(&view);
        assert!(text.contains(&format!("[warning] {NO_RETURNS_MESSAGE}")));
        assert!(!text.contains("[success]"));
    }
}
