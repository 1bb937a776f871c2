use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::Local;

use revenge_week::{db, matchups, roster, schedule, teams};

// Text dump of the week's slate and revenge cases, for poking at a
// database without generating the page.
fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let source = std::env::args()
        .nth(1)
        .filter(|arg| !arg.trim().is_empty())
        .or_else(|| std::env::var("REVENGE_DB").ok())
        .ok_or_else(|| anyhow!("usage: slate <db path|url> [week]"))?;
    let week_override = std::env::args()
        .nth(2)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid week '{raw}'"))
        })
        .transpose()?;

    let db_path: PathBuf = db::resolve_database(&source, false)?;
    let conn = db::open_player_db(&db_path)?;

    let table = schedule::default_week_table()?;
    let week =
        week_override.unwrap_or_else(|| schedule::current_week(Local::now().date_naive(), &table));
    println!("Week {week}");

    let slate = matchups::week_matchups(&conn, week)?;
    let players = roster::collect_revenge_players(&conn, &slate)?;

    for matchup in &slate {
        println!(
            "{} @ {}",
            teams::to_display_code(&matchup.away),
            teams::to_display_code(&matchup.home)
        );
        let in_matchup = |p: &&roster::Player| {
            (p.current_team == matchup.away && p.former_team == matchup.home)
                || (p.current_team == matchup.home && p.former_team == matchup.away)
        };
        for player in players.iter().filter(in_matchup) {
            println!(
                "  {} ({}, {}) vs {} [{}]",
                player.name,
                player.position,
                teams::to_display_code(&player.current_team),
                teams::to_display_code(&player.former_team),
                player.revenge_type.label()
            );
        }
    }

    if players.is_empty() {
        println!("No revenge games this week.");
    }

    Ok(())
}
