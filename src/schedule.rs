//! Season week windows and current-week resolution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar window covered by one schedule week. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

const DEFAULT_WEEK_TABLE: &str = include_str!("../data/week_table_2025.json");

/// Week windows for the current regular season.
pub fn default_week_table() -> Result<Vec<WeekWindow>> {
    let table: Vec<WeekWindow> =
        serde_json::from_str(DEFAULT_WEEK_TABLE).context("invalid embedded week table")?;
    validate_week_table(&table)?;
    Ok(table)
}

/// Load a week table override from a JSON file.
pub fn load_week_table(path: &Path) -> Result<Vec<WeekWindow>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read week table {}", path.display()))?;
    let table: Vec<WeekWindow> =
        serde_json::from_str(&raw).with_context(|| format!("parse week table {}", path.display()))?;
    validate_week_table(&table)?;
    Ok(table)
}

// Windows must be individually well-formed, in week order, and non-overlapping.
fn validate_week_table(table: &[WeekWindow]) -> Result<()> {
    for window in table {
        if window.end < window.start {
            return Err(anyhow!(
                "week {} ends before it starts ({} > {})",
                window.week,
                window.start,
                window.end
            ));
        }
    }
    for pair in table.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.week <= prev.week {
            return Err(anyhow!("week table out of order at week {}", next.week));
        }
        if next.start <= prev.end {
            return Err(anyhow!(
                "week {} overlaps week {}",
                next.week,
                prev.week
            ));
        }
    }
    Ok(())
}

/// First window containing `today` wins; outside every window the season
/// falls back to week 1.
pub fn current_week(today: NaiveDate, table: &[WeekWindow]) -> u32 {
    table
        .iter()
        .find(|window| window.contains(today))
        .map(|window| window.week)
        .unwrap_or(1)
}
