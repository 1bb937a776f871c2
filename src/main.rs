use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::Local;

use revenge_week::{db, matchups, report, roster, schedule};

const DEFAULT_OUT: &str = "revenge_week.html";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let source = parse_string_arg("--db")
        .or_else(|| env_string("REVENGE_DB"))
        .ok_or_else(|| anyhow!("no database given; pass --db <path|url> or set REVENGE_DB"))?;
    let refresh = has_flag("--refresh");
    let out = parse_string_arg("--out")
        .or_else(|| env_string("REVENGE_OUT"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let week_table_path = parse_string_arg("--week-table")
        .or_else(|| env_string("REVENGE_WEEK_TABLE"))
        .map(PathBuf::from);
    let week_override = parse_string_arg("--week")
        .or_else(|| env_string("REVENGE_WEEK"))
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid week '{raw}'"))
        })
        .transpose()?;

    let db_path = db::resolve_database(&source, refresh)?;
    let conn = db::open_player_db(&db_path)?;

    let table = match week_table_path.as_deref() {
        Some(path) => schedule::load_week_table(path)?,
        None => schedule::default_week_table()?,
    };
    let week =
        week_override.unwrap_or_else(|| schedule::current_week(Local::now().date_naive(), &table));

    let slate = matchups::week_matchups(&conn, week)?;
    let players = roster::collect_revenge_players(&conn, &slate)?;

    let html = report::render_page(week, &players);
    fs::write(&out, html).with_context(|| format!("write report {}", out.display()))?;

    println!("Revenge report complete");
    println!("DB: {}", db_path.display());
    println!("Week: {week}");
    println!("Matchups: {}", slate.len());
    println!("Players with revenge: {}", players.len());
    println!("Report: {}", out.display());

    Ok(())
}

fn parse_string_arg(flag: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&format!("{flag}=")) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}

fn has_flag(flag: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == flag)
}

fn env_string(key: &str) -> Option<String> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
