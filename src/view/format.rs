//! Text formatting helpers shared by all sections

use chrono::NaiveDate;
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

/// Fallback shown for every absent value
pub const NOT_AVAILABLE: &str = "N/A";

/// Matches opening and closing paragraph tags, with or without attributes
static PARAGRAPH_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?p[^>]*>").expect("paragraph tag pattern is valid"));

/// How HTML summaries from the API are turned into output text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryPolicy {
    /// Convert the markup to plain text
    #[default]
    Plain,
    /// Only remove wrapping `<p>` tags, keeping any other markup
    StripParagraphs,
    /// Pass the markup through unmodified
    Raw,
}

impl SummaryPolicy {
    pub fn apply(self, html: &str) -> String {
        match self {
            SummaryPolicy::Plain => nanohtml2text::html2text(html).trim().to_string(),
            SummaryPolicy::StripParagraphs => PARAGRAPH_TAGS.replace_all(html, "").into_owned(),
            SummaryPolicy::Raw => html.to_string(),
        }
    }
}

/// Formats a `YYYY-MM-DD` date in en-US long form, e.g. "July 15, 2016"
///
/// Dates that do not parse are returned as received.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Formats an optional date, treating a missing or empty value as absent
pub fn format_optional_date(date: Option<&str>) -> String {
    match date {
        Some(date) if !date.is_empty() => format_date(date),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Renders the value or the `N/A` fallback
pub fn or_not_available<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Like [`or_not_available`], but an empty string also counts as absent
pub fn text_or_not_available(value: Option<&str>) -> String {
    or_not_available(value.filter(|v| !v.is_empty()))
}

/// Treats zero the same as an absent number
///
/// TVMaze reports unknown runtimes, ratings and episode orders as either
/// `null` or `0`; both render the fallback.
pub fn non_zero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

/// Builds avatar initials from the first letter of each name part
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}
