use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use revenge_week::matchups::{Matchup, parse_week_slate, week_matchups};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_week_slate_fixture() {
    let raw = read_fixture("week_slate.json");
    let slate = parse_week_slate(&raw).expect("fixture should parse");
    assert_eq!(slate.len(), 5);

    // Dates ascending, games in listed order within a date.
    assert_eq!(slate[0], Matchup { away: "MIA".into(), home: "BUF".into() });
    // All three modern codes rewritten to their database equivalents.
    assert_eq!(slate[1], Matchup { away: "SDG".into(), home: "KAN".into() });
    assert_eq!(slate[2], Matchup { away: "NWE".into(), home: "NYJ".into() });
    assert_eq!(slate[3], Matchup { away: "CIN".into(), home: "MIN".into() });
    assert_eq!(slate[4], Matchup { away: "DET".into(), home: "OTI".into() });
}

#[test]
fn week_matchups_reads_the_text_week_column() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE schedule (week TEXT NOT NULL, matchups TEXT NOT NULL);",
    )
    .expect("create schedule table");
    conn.execute(
        "INSERT INTO schedule (week, matchups) VALUES ('3', ?1)",
        [read_fixture("week_slate.json")],
    )
    .expect("insert slate row");

    let slate = week_matchups(&conn, 3).expect("week 3 should resolve");
    assert_eq!(slate.len(), 5);
}

#[test]
fn missing_schedule_row_is_an_error() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE schedule (week TEXT NOT NULL, matchups TEXT NOT NULL);",
    )
    .expect("create schedule table");

    let err = week_matchups(&conn, 7).expect_err("week 7 has no row");
    assert!(err.to_string().contains("week 7"));
}

#[test]
fn malformed_slate_propagates_as_an_error() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE schedule (week TEXT NOT NULL, matchups TEXT NOT NULL);
         INSERT INTO schedule (week, matchups) VALUES ('2', 'not json');",
    )
    .expect("seed schedule table");

    assert!(week_matchups(&conn, 2).is_err());
}
