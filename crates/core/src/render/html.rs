use crate::dashboard::view::{DashboardView, DETAILS_PLACEHOLDER};
use crate::render::chart::bar_chart_svg;
use crate::strategy::recommendation::Level;

const STYLE: &str = r#"
  body { font-family: sans-serif; background: #fafafa; color: #222; }
  .main { max-width: 800px; margin: auto; padding-top: 20px; }
  h1, h2, h3, p { text-align: center; }
  .logo { display: block; margin: 0 auto; }
  .alert { border-radius: 6px; padding: 12px 16px; margin: 12px 0; }
  .alert.success { background: #e6f4ea; color: #1e6b34; }
  .alert.info { background: #e7f1fb; color: #1c4f82; }
  .alert.warning { background: #fff6e0; color: #7a5600; }
  details { margin: 16px 0; border: 1px solid #ddd; border-radius: 6px; padding: 8px 12px; }
  form.action { text-align: center; margin: 16px 0; }
  form.action button { font-size: 1em; padding: 8px 18px; border-radius: 6px; border: 1px solid #ccc; cursor: pointer; }
"#;

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub logo_src: String,
    pub action_path: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            logo_src: "/logo.png".to_string(),
            action_path: "/".to_string(),
        }
    }
}

pub fn render_page(view: &DashboardView, opts: &PageOptions) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"<img class="logo" src="{}" width="120" alt="PIREScoin logo">"#,
        escape(&opts.logo_src)
    ));
    body.push_str(r#"<h1 style="color:#f4c430;">PIREScoin</h1>"#);
    body.push_str("<p>Daily cryptocurrency analysis with strategic intelligence</p><hr>");

    match view {
        DashboardView::NoAssets { message } | DashboardView::NoReturns { message } => {
            body.push_str(&alert(Level::Warning, &format!("⚠️ {message}")));
        }
        DashboardView::Ranked {
            banner,
            ranked,
            recommendation,
            ..
        } => {
            body.push_str("<h2>📊 Latest analysis</h2>");
            body.push_str(&alert(Level::Success, banner));

            body.push_str("<h3>📉 Return comparison</h3>");
            body.push_str(&bar_chart_svg(ranked));

            body.push_str("<details><summary>🔍 See more details (coming soon)</summary>");
            body.push_str(&alert(Level::Info, DETAILS_PLACEHOLDER));
            body.push_str("</details>");

            body.push_str(&format!(
                r#"<form class="action" method="get" action="{}"><input type="hidden" name="suggest" value="true"><button type="submit">🚀 Suggest strategic entry</button></form>"#,
                escape(&opts.action_path)
            ));

            if let Some(rec) = recommendation {
                body.push_str("<h3>📌 Strategic recommendation</h3>");
                body.push_str(&alert(rec.level, &rec.message));
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>PIREScoin – Treasure Hunt</title><style>{STYLE}</style></head>\
         <body><div class=\"main\">{body}</div></body></html>\n"
    )
}

fn alert(level: Level, text: &str) -> String {
    format!(
        r#"<div class="alert {}">{}</div>"#,
        level.as_str(),
        escape(text)
    )
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank::{RankedReturn, RankedReturns};
    use crate::dashboard::view::{NO_ASSETS_MESSAGE, NO_RETURNS_MESSAGE};
    use crate::strategy::recommendation::Recommendation;

    fn ranked_view(with_rec: bool) -> DashboardView {
        let ranked = RankedReturns::rank(vec![
            RankedReturn {
                name: "Bitcoin (BTC)".to_string(),
                symbol: "BTC-USD".to_string(),
                value: 0.03,
            },
            RankedReturn {
                name: "Ethereum (ETH)".to_string(),
                symbol: "ETH-USD".to_string(),
                value: -0.01,
            },
        ]);
        let best = ranked.best().cloned().unwrap();
        DashboardView::Ranked {
            banner: "Best crypto today: Bitcoin (BTC) with a return of 3.00%".to_string(),
            recommendation: with_rec.then(|| Recommendation::for_return(&best.name, best.value)),
            best,
            ranked,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn ranked_page_has_banner_chart_details_and_action() {
        let html = render_page(&ranked_view(false), &PageOptions::default());
        assert!(html.contains(r#"class="alert success">Best crypto today: Bitcoin (BTC)"#));
        assert!(html.contains("<svg"));
        assert!(html.contains("<details>"));
        assert!(html.contains(DETAILS_PLACEHOLDER));
        assert!(html.contains(r#"name="suggest" value="true""#));
        assert!(!html.contains("Strategic recommendation"));
    }

    #[test]
    fn suggested_page_shows_recommendation_level() {
        let html = render_page(&ranked_view(true), &PageOptions::default());
        assert!(html.contains("Strategic recommendation"));
        assert!(html.contains("The trend for Bitcoin (BTC) is positive."));
    }

    #[test]
    fn warning_pages_have_no_chart_or_banner() {
        for (view, msg) in [
            (
                DashboardView::NoReturns {
                    message: NO_RETURNS_MESSAGE.to_string(),
                },
                NO_RETURNS_MESSAGE,
            ),
            (
                DashboardView::NoAssets {
                    message: NO_ASSETS_MESSAGE.to_string(),
                },
                NO_ASSETS_MESSAGE,
            ),
        ] {
            let html = render_page(&view, &PageOptions::default());
            assert!(html.contains(r#"class="alert warning""#));
            assert!(html.contains(msg));
            assert!(!html.contains("<svg"));
            assert!(!html.contains("Best crypto today"));
            assert!(!html.contains(r#"name="suggest""#));
        }
    }
}
