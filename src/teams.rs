//! Franchise code tables and position groupings.
//!
//! The player database stores relocated/renamed franchises under their
//! historical codes; current schedules use the modern codes. Exactly three
//! franchises differ, mapped bidirectionally here.

/// Rewrite a modern display code to the code used inside the database.
pub fn to_db_code(code: &str) -> &str {
    match code {
        "LAC" => "SDG",
        "TEN" => "OTI",
        "NE" => "NWE",
        other => other,
    }
}

/// Rewrite a database code to the current display code.
pub fn to_display_code(code: &str) -> &str {
    match code {
        "SDG" => "LAC",
        "OTI" => "TEN",
        "NWE" => "NE",
        other => other,
    }
}

pub fn is_legacy_code(code: &str) -> bool {
    matches!(code, "SDG" | "OTI" | "NWE")
}

/// Full franchise name for a display code.
pub fn team_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "CRD" => "Arizona Cardinals",
        "ATL" => "Atlanta Falcons",
        "RAV" => "Baltimore Ravens",
        "BUF" => "Buffalo Bills",
        "CAR" => "Carolina Panthers",
        "CHI" => "Chicago Bears",
        "CIN" => "Cincinnati Bengals",
        "CLE" => "Cleveland Browns",
        "DAL" => "Dallas Cowboys",
        "DEN" => "Denver Broncos",
        "DET" => "Detroit Lions",
        "GNB" => "Green Bay Packers",
        "HTX" => "Houston Texans",
        "CLT" => "Indianapolis Colts",
        "JAX" => "Jacksonville Jaguars",
        "KAN" => "Kansas City Chiefs",
        "RAI" => "Las Vegas Raiders",
        "LAC" => "Los Angeles Chargers",
        "RAM" => "Los Angeles Rams",
        "MIA" => "Miami Dolphins",
        "MIN" => "Minnesota Vikings",
        "NE" => "New England Patriots",
        "NOR" => "New Orleans Saints",
        "NYG" => "New York Giants",
        "NYJ" => "New York Jets",
        "PHI" => "Philadelphia Eagles",
        "PIT" => "Pittsburgh Steelers",
        "SFO" => "San Francisco 49ers",
        "SEA" => "Seattle Seahawks",
        "TAM" => "Tampa Bay Buccaneers",
        "TEN" => "Tennessee Titans",
        "WAS" => "Washington Commanders",
        _ => return None,
    };
    Some(name)
}

/// Report categories, in render order.
pub const CATEGORIES: [&str; 8] = ["QB", "RB", "WR", "TE", "OL", "DL-LB", "DB", "UTIL"];

/// Collapse a roster position code into its report category.
/// Anything unrecognized lands in UTIL alongside the specialists.
pub fn position_category(position: &str) -> &'static str {
    match position {
        "QB" => "QB",
        "RB" => "RB",
        "WR" => "WR",
        "TE" => "TE",
        "C" | "T" | "G" | "OL" => "OL",
        "DE" | "DT" | "DL" | "OLB" | "MLB" | "ILB" | "LB" => "DL-LB",
        "CB" | "FS" | "SS" | "S" | "DB" => "DB",
        _ => "UTIL",
    }
}

/// Container id stem for a category ("DL-LB" -> "dl-lb").
pub fn category_slug(category: &str) -> String {
    category.to_ascii_lowercase()
}
