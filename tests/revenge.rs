use rusqlite::{Connection, params};

use revenge_week::matchups::Matchup;
use revenge_week::roster::{RevengeType, collect_revenge_players, players_with_revenge};

fn seed_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        r#"
        CREATE TABLE schedule (week TEXT NOT NULL, matchups TEXT NOT NULL);
        CREATE TABLE players (
            player_id TEXT NOT NULL,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            team TEXT NOT NULL,
            team_history TEXT NOT NULL,
            initial_team TEXT NOT NULL,
            fantasy_pos_rk INTEGER NULL,
            headshot_url TEXT NULL
        );
        "#,
    )
    .expect("create schema");
    conn
}

#[allow(clippy::too_many_arguments)]
fn insert_player(
    conn: &Connection,
    player_id: &str,
    name: &str,
    position: &str,
    team: &str,
    team_history: &str,
    initial_team: &str,
    fantasy_pos_rk: Option<i64>,
) {
    conn.execute(
        "INSERT INTO players (player_id, name, position, team, team_history, initial_team,
                              fantasy_pos_rk, headshot_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)",
        params![player_id, name, position, team, team_history, initial_team, fantasy_pos_rk],
    )
    .expect("insert player");
}

fn matchup(away: &str, home: &str) -> Matchup {
    Matchup { away: away.into(), home: home.into() }
}

#[test]
fn query_returns_only_players_on_the_first_argument_team() {
    let conn = seed_db();
    insert_player(
        &conn,
        "DaltAn00",
        "Andy Dalton",
        "QB",
        "CAR",
        "{'CAR': ['2023', '2024'], 'CIN': ['2012', '2013']}",
        "CIN",
        Some(30),
    );
    insert_player(
        &conn,
        "BurrJo01",
        "Joe Burrow",
        "QB",
        "CIN",
        "{'CIN': ['2020', '2021', '2022']}",
        "CIN",
        Some(1),
    );

    let car_side = players_with_revenge(&conn, "CAR", "CIN").expect("query CAR vs CIN");
    assert_eq!(car_side.len(), 1);
    assert_eq!(car_side[0].player_id, "DaltAn00");

    // The opposite direction is independent; Burrow never left CIN and CAR
    // is not in his history.
    let cin_side = players_with_revenge(&conn, "CIN", "CAR").expect("query CIN vs CAR");
    assert!(cin_side.is_empty());
}

#[test]
fn empty_result_is_no_players_not_an_error() {
    let conn = seed_db();
    let rows = players_with_revenge(&conn, "SEA", "SFO").expect("empty table query");
    assert!(rows.is_empty());
}

#[test]
fn classification_follows_initial_team() {
    let conn = seed_db();
    // Initial team differs from current: a "former" grudge even when the
    // opponent is the initial team.
    insert_player(
        &conn,
        "DaltAn00",
        "Andy Dalton",
        "QB",
        "CAR",
        "{'CAR': ['2023', '2024'], 'CIN': ['2012', '2013']}",
        "CIN",
        Some(30),
    );
    // Initial team equals current team: returning to face a former stop
    // counts as "original" revenge.
    insert_player(
        &conn,
        "CollLJ00",
        "L.J. Collier",
        "DL",
        "CRD",
        "{'CRD': ['2023', '2024'], 'SEA': ['2019', '2020']}",
        "CRD",
        None,
    );

    let players = collect_revenge_players(
        &conn,
        &[matchup("CAR", "CIN"), matchup("SEA", "CRD")],
    )
    .expect("collect players");

    let dalton = players.iter().find(|p| p.player_id == "DaltAn00").expect("dalton present");
    assert_eq!(dalton.revenge_type, RevengeType::Former);
    assert_eq!(dalton.former_team, "CIN");

    let collier = players.iter().find(|p| p.player_id == "CollLJ00").expect("collier present");
    assert_eq!(collier.revenge_type, RevengeType::Original);
    assert_eq!(collier.former_team, "SEA");
}

#[test]
fn legacy_code_in_history_matches_by_substring() {
    let conn = seed_db();
    insert_player(
        &conn,
        "OlivJo00",
        "Josh Oliver",
        "TE",
        "MIN",
        "{'JAX': ['2019'], 'SDG': ['2021'], 'MIN': ['2023', '2024']}",
        "JAX",
        Some(20),
    );

    // The slate normalizes LAC to SDG before the lookup, so the query
    // sees the same code the history stores.
    let rows = players_with_revenge(&conn, "MIN", "SDG").expect("query MIN vs SDG");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, "OlivJo00");
}

#[test]
fn one_player_two_opponents_yields_two_records() {
    let conn = seed_db();
    insert_player(
        &conn,
        "JordMi01",
        "Michael Jordan",
        "OL",
        "TAM",
        "{'CIN': ['2019', '2020'], 'CAR': ['2021', '2022'], 'TAM': ['2025']}",
        "CIN",
        None,
    );

    let players = collect_revenge_players(
        &conn,
        &[matchup("TAM", "CIN"), matchup("CAR", "TAM")],
    )
    .expect("collect players");

    assert_eq!(players.len(), 2);
    let mut opponents: Vec<&str> = players.iter().map(|p| p.former_team.as_str()).collect();
    opponents.sort_unstable();
    assert_eq!(opponents, ["CAR", "CIN"]);
    for player in &players {
        assert_eq!(player.player_id, "JordMi01");
        assert_eq!(player.revenge_type, RevengeType::Former);
    }
}

#[test]
fn both_directions_of_a_matchup_are_checked() {
    let conn = seed_db();
    insert_player(
        &conn,
        "KirkCh01",
        "Christian Kirk",
        "WR",
        "HTX",
        "{'CRD': ['2018'], 'JAX': ['2022', '2023']}",
        "CRD",
        Some(40),
    );
    insert_player(
        &conn,
        "EngrEv00",
        "Evan Engram",
        "TE",
        "JAX",
        "{'NYG': ['2017'], 'JAX': ['2022'], 'HTX': ['2024']}",
        "NYG",
        Some(12),
    );

    let players =
        collect_revenge_players(&conn, &[matchup("HTX", "JAX")]).expect("collect players");

    assert_eq!(players.len(), 2);
    assert!(players.iter().any(|p| p.player_id == "KirkCh01" && p.former_team == "JAX"));
    assert!(players.iter().any(|p| p.player_id == "EngrEv00" && p.former_team == "HTX"));
}
