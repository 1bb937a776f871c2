//! Week slate extraction: schedule-row lookup, slate JSON decode, and
//! normalization onto database team codes.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use serde::Deserialize;

use crate::teams;

/// One scheduled game, both sides in database team codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub away: String,
    pub home: String,
}

#[derive(Debug, Deserialize)]
struct SlateGame {
    #[serde(rename = "awayTeam")]
    away_team: String,
    #[serde(rename = "homeTeam")]
    home_team: String,
}

/// Decode a serialized week slate (`date -> games`) into a flat matchup
/// list, dates ascending. Modern team codes are rewritten to their
/// database equivalents here, before anything downstream sees them.
pub fn parse_week_slate(raw: &str) -> Result<Vec<Matchup>> {
    let slate: BTreeMap<String, Vec<SlateGame>> =
        serde_json::from_str(raw).context("invalid week slate json")?;

    let mut out = Vec::new();
    for games in slate.into_values() {
        for game in games {
            out.push(Matchup {
                away: teams::to_db_code(&game.away_team).to_string(),
                home: teams::to_db_code(&game.home_team).to_string(),
            });
        }
    }
    Ok(out)
}

/// Load and decode the matchups for one week. A missing schedule row or a
/// malformed slate is an error; there is no fallback week.
pub fn week_matchups(conn: &Connection, week: u32) -> Result<Vec<Matchup>> {
    // The week column is stored as text in the prebuilt database.
    let raw: String = conn
        .query_row(
            "SELECT matchups FROM schedule WHERE week = ?1",
            params![week.to_string()],
            |row| row.get(0),
        )
        .with_context(|| format!("load schedule row for week {week}"))?;
    parse_week_slate(&raw).with_context(|| format!("decode slate for week {week}"))
}
