use anyhow::Context;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// One-day query window `[start 00:00, end 00:00)` in the host's local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchWindow {
    pub fn ending_on(today: NaiveDate) -> anyhow::Result<Self> {
        let start = today
            .pred_opt()
            .with_context(|| format!("no previous day for {today}"))?;
        Ok(Self { start, end: today })
    }

    pub fn today_local() -> anyhow::Result<Self> {
        Self::ending_on(Local::now().date_naive())
    }

    /// Window bounds as unix seconds at local midnight in `tz`.
    pub fn unix_bounds<Tz: TimeZone>(&self, tz: &Tz) -> anyhow::Result<(i64, i64)> {
        let start = midnight(self.start, tz)?.timestamp();
        let end = midnight(self.end, tz)?.timestamp();
        Ok((start, end))
    }
}

/// Explicit `YYYY-MM-DD` as "today", else the local date.
pub fn resolve_window(today_arg: Option<&str>) -> anyhow::Result<FetchWindow> {
    match today_arg {
        Some(s) => {
            let today = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))?;
            FetchWindow::ending_on(today)
        }
        None => FetchWindow::today_local(),
    }
}

fn midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> anyhow::Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("invalid midnight for {date}"))?;
    // DST transitions can make local midnight ambiguous; take the earlier instant.
    tz.from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("local midnight does not exist for {date}"))
}
