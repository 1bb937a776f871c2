//! Revenge lookup and player aggregation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::matchups::Matchup;

/// Raw players-table row for one revenge candidate.
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub team_history: String,
    pub initial_team: String,
    pub fantasy_pos_rk: Option<i64>,
    pub headshot_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevengeType {
    /// Facing the franchise that first fielded him.
    Original,
    /// Facing any other prior stop.
    Former,
}

impl RevengeType {
    pub fn label(self) -> &'static str {
        match self {
            RevengeType::Original => "original",
            RevengeType::Former => "former",
        }
    }
}

/// One revenge case: a player attributed to a single opponent context.
/// A player facing two former teams in the same week yields two records.
#[derive(Debug, Clone)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub current_team: String,
    pub revenge_type: RevengeType,
    /// Opponent he has history with, in database code.
    pub former_team: String,
    /// Serialized team history as stored; decode with [`TeamHistory::parse`].
    pub team_history: String,
    pub fantasy_pos_rk: Option<i64>,
    pub headshot_url: Option<String>,
}

/// Decoded team history: team code -> seasons appeared, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamHistory(BTreeMap<String, Vec<String>>);

impl TeamHistory {
    /// Accepts strict JSON and the single-quoted variant found in older
    /// rows. Anything else is an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let map = match serde_json::from_str::<BTreeMap<String, Vec<String>>>(raw) {
            Ok(map) => map,
            Err(_) => serde_json::from_str(&raw.replace('\'', "\""))
                .context("invalid team history json")?,
        };
        Ok(Self(map))
    }

    pub fn seasons_with(&self, team: &str) -> &[String] {
        self.0.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

pub fn classify(initial_team: &str, current_team: &str) -> RevengeType {
    if initial_team == current_team {
        RevengeType::Original
    } else {
        RevengeType::Former
    }
}

/// All players on `team` whose recorded history mentions `opponent`.
///
/// The filter runs over the raw history text, so it stays exact only while
/// no team code is a substring of another; the shipped code set satisfies
/// that. An empty result set is a normal outcome, not an error.
pub fn players_with_revenge(
    conn: &Connection,
    team: &str,
    opponent: &str,
) -> Result<Vec<PlayerRow>> {
    let mut stmt = conn
        .prepare(
            "SELECT player_id, name, position, team, team_history, initial_team,
                    fantasy_pos_rk, headshot_url
             FROM players
             WHERE team = ?1 AND instr(team_history, ?2) > 0",
        )
        .context("prepare revenge query")?;

    let rows = stmt
        .query_map(params![team, opponent], |row| {
            Ok(PlayerRow {
                player_id: row.get(0)?,
                name: row.get(1)?,
                position: row.get(2)?,
                team: row.get(3)?,
                team_history: row.get(4)?,
                initial_team: row.get(5)?,
                fantasy_pos_rk: row.get(6)?,
                headshot_url: row.get(7)?,
            })
        })
        .context("query revenge players")?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("decode player row")?);
    }
    Ok(out)
}

/// Run the revenge lookup in both directions of every matchup and build
/// one [`Player`] per returned row.
pub fn collect_revenge_players(conn: &Connection, matchups: &[Matchup]) -> Result<Vec<Player>> {
    let mut players = Vec::new();
    for matchup in matchups {
        for (team, opponent) in [
            (matchup.away.as_str(), matchup.home.as_str()),
            (matchup.home.as_str(), matchup.away.as_str()),
        ] {
            for row in players_with_revenge(conn, team, opponent)? {
                players.push(build_player(row, opponent));
            }
        }
    }
    Ok(players)
}

fn build_player(row: PlayerRow, opponent: &str) -> Player {
    let revenge_type = classify(&row.initial_team, &row.team);
    Player {
        player_id: row.player_id,
        name: row.name,
        position: row.position,
        current_team: row.team,
        revenge_type,
        former_team: opponent.to_string(),
        team_history: row.team_history,
        fantasy_pos_rk: row.fantasy_pos_rk,
        headshot_url: row.headshot_url,
    }
}
