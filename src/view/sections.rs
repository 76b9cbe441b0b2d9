//! Rendering of the individual page sections
//!
//! Each function appends one section to the output buffer. Collections are
//! rendered in the order the API returns them.

use super::format::{
    NOT_AVAILABLE, format_date, format_optional_date, initials, non_zero, or_not_available,
    text_or_not_available,
};
use super::RenderOptions;
use crate::metadata_retrieval::{CastMember, Episode, Season, Show};

/// Width of the label column in key/value grids
const LABEL_WIDTH: usize = 13;

fn push_heading(out: &mut String, title: &str) {
    out.push_str(&format!("--- {} ---\n", title));
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "{:<width$}{}\n",
        format!("{}:", label),
        value,
        width = LABEL_WIDTH
    ));
}

/// Placeholder blocks shown while a request is in flight
pub(super) fn render_skeleton(out: &mut String) {
    const BLOCK: char = '░';

    // Title, subtitle, poster, then three lines of summary
    for (width, gap) in [(36, false), (24, true), (48, false), (48, false), (48, false), (36, true)] {
        out.push_str(&BLOCK.to_string().repeat(width));
        out.push('\n');
        if gap {
            out.push('\n');
        }
    }
}

/// Error panel carrying the message verbatim
pub(super) fn render_error(out: &mut String, message: &str) {
    out.push_str("!!! Error !!!\n");
    out.push_str(message);
    out.push('\n');
}

/// The title card with the key facts of the show
pub(super) fn render_title_card(out: &mut String, show: &Show, options: &RenderOptions) {
    out.push_str(&format!("=== {} ===\n", show.name));

    if !show.genres.is_empty() {
        let badges: Vec<String> = show.genres.iter().map(|g| format!("[{}]", g)).collect();
        out.push_str(&badges.join(" "));
        out.push('\n');
    }

    let poster = show.image.as_ref().and_then(|i| i.medium.as_deref());
    push_field(out, "Poster", &text_or_not_available(poster));
    out.push('\n');

    if let Some(summary) = show.summary.as_deref() {
        let summary = options.summary_policy.apply(summary);
        if !summary.is_empty() {
            out.push_str(&summary);
            out.push_str("\n\n");
        }
    }

    push_field(
        out,
        "Premiered",
        &format_optional_date(show.premiered.as_deref()),
    );
    push_field(
        out,
        "Runtime",
        &or_not_available(non_zero(show.runtime).map(|r| format!("{} min", r))),
    );
    push_field(
        out,
        "Rating",
        &or_not_available(non_zero(show.rating.as_ref().and_then(|r| r.average))),
    );
    push_field(
        out,
        "Network",
        &text_or_not_available(show.network.as_ref().and_then(|n| n.name.as_deref())),
    );
    push_field(out, "Status", &text_or_not_available(show.status.as_deref()));
    push_field(
        out,
        "Language",
        &text_or_not_available(show.language.as_deref()),
    );
}

pub(super) fn render_cast(out: &mut String, cast: &[CastMember]) {
    push_heading(out, "Cast");

    if cast.is_empty() {
        out.push_str("No cast information available.\n");
        return;
    }

    for member in cast {
        let character: &str = if member.character.name.is_empty() {
            NOT_AVAILABLE
        } else {
            &member.character.name
        };
        out.push_str(&format!(
            "({}) {} as {}\n",
            initials(&member.person.name),
            member.person.name,
            character
        ));
    }
}

/// Label of an episode, e.g. "S1E3: The Hunt"
fn episode_label(episode: &Episode) -> String {
    let name = episode.name.as_deref().unwrap_or(NOT_AVAILABLE);
    match episode.number {
        Some(number) => format!("S{}E{}: {}", episode.season, number, name),
        None => format!("S{} Special: {}", episode.season, name),
    }
}

pub(super) fn render_episodes(out: &mut String, episodes: &[Episode], options: &RenderOptions) {
    push_heading(out, "Episodes");

    if episodes.is_empty() {
        out.push_str("No episodes available.\n");
        return;
    }

    for episode in episodes {
        out.push_str(&episode_label(episode));
        out.push('\n');
        out.push_str(&format!(
            "  Air Date: {}\n",
            format_optional_date(episode.airdate.as_deref())
        ));
        out.push_str(&format!(
            "  Runtime:  {}\n",
            or_not_available(episode.runtime.map(|r| format!("{} minutes", r)))
        ));

        if let Some(summary) = episode.summary.as_deref() {
            let summary = options.summary_policy.apply(summary);
            if !summary.is_empty() {
                out.push_str(&format!("  {}\n", summary));
            }
        }
    }
}

/// Date range of a season, only shown when both ends are known
fn season_dates(season: &Season) -> String {
    match (
        season.premiere_date.as_deref().filter(|d| !d.is_empty()),
        season.end_date.as_deref().filter(|d| !d.is_empty()),
    ) {
        (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
        _ => "Dates not available".to_string(),
    }
}

pub(super) fn render_seasons(out: &mut String, seasons: &[Season], options: &RenderOptions) {
    push_heading(out, "Seasons");

    if seasons.is_empty() {
        out.push_str("No seasons available.\n");
        return;
    }

    for season in seasons {
        out.push_str(&format!("Season {}\n", season.number));
        out.push_str(&format!("  {}\n", season_dates(season)));
        out.push_str(&format!(
            "  Episodes: {}\n",
            or_not_available(non_zero(season.episode_order))
        ));
        out.push_str(&format!(
            "  Network:  {}\n",
            text_or_not_available(season.network.as_ref().and_then(|n| n.name.as_deref()))
        ));

        if let Some(summary) = season.summary.as_deref() {
            let summary = options.summary_policy.apply(summary);
            if !summary.is_empty() {
                out.push_str(&format!("  {}\n", summary));
            }
        }
    }
}

/// Schedule as "Monday, Tuesday at 21:00"
fn schedule_text(show: &Show) -> String {
    let Some(schedule) = show.schedule.as_ref() else {
        return NOT_AVAILABLE.to_string();
    };

    match (schedule.days.is_empty(), schedule.time.is_empty()) {
        (true, true) => NOT_AVAILABLE.to_string(),
        (false, true) => schedule.days.join(", "),
        (true, false) => format!("at {}", schedule.time),
        (false, false) => format!("{} at {}", schedule.days.join(", "), schedule.time),
    }
}

pub(super) fn render_details(out: &mut String, show: &Show) {
    push_heading(out, "Additional Details");

    push_field(out, "Type", &text_or_not_available(show.kind.as_deref()));
    push_field(
        out,
        "Site",
        &text_or_not_available(show.official_site.as_deref()),
    );
    push_field(out, "Schedule", &schedule_text(show));
    push_field(
        out,
        "Country",
        &text_or_not_available(
            show.network
                .as_ref()
                .and_then(|n| n.country.as_ref())
                .and_then(|c| c.name.as_deref()),
        ),
    );
    push_field(
        out,
        "Premiered",
        &format_optional_date(show.premiered.as_deref()),
    );
    push_field(out, "Ended", &format_optional_date(show.ended.as_deref()));

    if let Some(web_channel) = show.web_channel.as_ref() {
        out.push('\n');
        push_field(
            out,
            "Web Channel",
            &text_or_not_available(web_channel.name.as_deref()),
        );
    }

    if let Some(externals) = show.externals.as_ref() {
        out.push_str("\nExternal IDs\n");
        push_field(
            out,
            "  IMDB",
            &text_or_not_available(externals.imdb.as_deref()),
        );
        push_field(out, "  TheTVDB", &or_not_available(non_zero(externals.thetvdb)));
    }
}
