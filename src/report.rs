//! HTML report generation.
//!
//! Produces a self-contained page: one table-of-contents container and one
//! bio container per position category, populated with the week's revenge
//! players. The markup mirrors what the live site injects into its
//! category containers.

use crate::roster::{Player, TeamHistory};
use crate::teams;

const HEADSHOT_BASE: &str = "https://www.pro-football-reference.com/req/20230307/images/headshots";
const FALLBACK_IMAGE: &str = "assets/images/football3.png";
const CURRENT_SEASON: &str = "2025";

/// Group players into `(category, players)` buckets in render order.
/// Inside a category, players sort by fantasy position rank, unranked
/// last, then by name.
pub fn group_by_category(players: &[Player]) -> Vec<(&'static str, Vec<&Player>)> {
    let mut groups = Vec::with_capacity(teams::CATEGORIES.len());
    for category in teams::CATEGORIES {
        let mut bucket: Vec<&Player> = players
            .iter()
            .filter(|p| teams::position_category(&p.position) == category)
            .collect();
        bucket.sort_by(|a, b| {
            let rank_a = a.fantasy_pos_rk.unwrap_or(i64::MAX);
            let rank_b = b.fantasy_pos_rk.unwrap_or(i64::MAX);
            rank_a.cmp(&rank_b).then_with(|| a.name.cmp(&b.name))
        });
        groups.push((category, bucket));
    }
    groups
}

/// Table-of-contents entry linking to a player's bio block.
pub fn render_toc_entry(player: &Player) -> String {
    format!(
        r##"<li><a href="#{id}" class="player-link">{name}</a></li><br>"##,
        id = html_escape(&player.player_id),
        name = html_escape(&player.name),
    )
}

/// Full bio block for one revenge case.
pub fn render_bio_section(player: &Player) -> String {
    let (seasons, first_grudge_season) = season_detail(player);
    // History lookups ran on the database code; only the displayed code
    // and name switch to the modern franchise identity.
    let display_code = teams::to_display_code(&player.former_team);
    let former_name = teams::team_name(display_code).unwrap_or(display_code);

    let hover_image = match first_grudge_season.as_deref() {
        Some(season) => format!(
            r#"
                                    <img src="{base}/{id}_{season}.jpg"
                                        data-hover="{base}/{id}_{season}.jpg"
                                        data-normal="{base}/{id}_{current}.jpg"
                                        alt onerror="this.onerror=null;this.src='none'" class="hover">"#,
            base = HEADSHOT_BASE,
            id = html_escape(&player.player_id),
            season = html_escape(season),
            current = CURRENT_SEASON,
        ),
        None => String::new(),
    };

    format!(
        r##"<section class="whats-trending" id="{id}">
            <br><br>&nbsp;
            <div class="container expanded">
                <div class="row">
                    <div class="col-lg-6 align-self-center">
                        <div class="section-heading">
                            <h2>{name}</h2>
                        </div>
                        <div class="left-content">
                            <p>{name} ({position}, {team}) goes up against his {revenge_type} team the <b>{former_name}</b> this week.</p>
                                    <div class="primary-button">
                                        <a href="#revenge-games">Back to Table</a>
                                    </div>
                        </div>
                    </div>
                    <div class="col-lg-4">
                        <div class="right-image">
                            <div class="thumb">
                                <div class="hover-effect">
                                    <div class="inner-content">
                                        <h4><a href="#">Seasons with {display_code}</a></h4>
                                        <span>{seasons}</span>
                                    </div>
                                </div>
                                <div class="fade-wrapper">
                                    <img src="{base}/{id}_{current}.jpg"
                                        alt onerror="this.onerror=null;this.src='{fallback}'"
                                        class="normal">{hover_image}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>"##,
        id = html_escape(&player.player_id),
        name = html_escape(&player.name),
        position = html_escape(&player.position),
        team = html_escape(&player.current_team),
        revenge_type = player.revenge_type.label(),
        former_name = html_escape(former_name),
        display_code = html_escape(display_code),
        seasons = html_escape(&seasons),
        base = HEADSHOT_BASE,
        current = CURRENT_SEASON,
        fallback = FALLBACK_IMAGE,
        hover_image = hover_image,
    )
}

/// Assemble the whole report page for one week.
pub fn render_page(week: u32, players: &[Player]) -> String {
    let sections: String = group_by_category(players)
        .into_iter()
        .map(|(category, bucket)| render_category(category, &bucket))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Revenge Games - Week {week}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header id="revenge-games">
            <h1>Revenge Games</h1>
            <div class="meta">Week {week} &middot; {count} player{plural}</div>
        </header>
{sections}
    </div>
</body>
</html>"#,
        week = week,
        count = players.len(),
        plural = if players.len() == 1 { "" } else { "s" },
        css = inline_css(),
        sections = sections,
    )
}

fn render_category(category: &str, players: &[&Player]) -> String {
    let slug = teams::category_slug(category);
    let names: String = players.iter().map(|p| render_toc_entry(p)).collect();
    let bios: String = players.iter().map(|p| render_bio_section(p)).collect();

    format!(
        r#"        <section class="category" id="{slug}">
            <h2>{category}</h2>
            <ul id="{slug}-names">{names}</ul>
            <div id="{slug}-bios">{bios}</div>
        </section>
"#,
        slug = slug,
        category = html_escape(category),
        names = names,
        bios = bios,
    )
}

// Seasons with the former team, joined for display, plus the first grudge
// season (drives the historical headshot). A row with unreadable history
// still renders, just without season detail.
fn season_detail(player: &Player) -> (String, Option<String>) {
    match TeamHistory::parse(&player.team_history) {
        Ok(history) => {
            let seasons = history.seasons_with(&player.former_team);
            (seasons.join(", "), seasons.first().cloned())
        }
        Err(err) => {
            eprintln!(
                "[WARN] unreadable team history for {}: {err}",
                player.player_id
            );
            (String::new(), None)
        }
    }
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; line-height: 1.6; color: #111827; background: #ffffff; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem; }
header { margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 2px solid #e5e7eb; }
header h1 { font-size: 2rem; font-weight: 700; }
header .meta { color: #6b7280; font-size: 0.875rem; }
.category { margin-bottom: 2rem; }
.category h2 { font-size: 1.25rem; margin-bottom: 0.5rem; }
.category ul { list-style: none; }
.player-link { color: #1d4ed8; text-decoration: none; }
.player-link:hover { text-decoration: underline; }
.whats-trending { padding: 1rem 0; border-bottom: 1px solid #e5e7eb; }
.section-heading h2 { font-size: 1.1rem; }
.primary-button a { color: #1d4ed8; font-size: 0.875rem; }
.fade-wrapper img { max-width: 160px; border-radius: 4px; }
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
