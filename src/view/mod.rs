//! Text rendering of the search page
//!
//! The view is a pure projection of the fetch state: it reads the state,
//! never changes it, and produces the complete page as a string.

mod format;
mod sections;

pub use format::{NOT_AVAILABLE, SummaryPolicy, format_date};

use crate::fetch::FetchState;
use crate::metadata_retrieval::Show;

/// The tabbed sections below the title card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Cast,
    Episodes,
    Seasons,
    Details,
    /// Every section, one after another
    All,
}

impl Tab {
    /// Tabs in display order, excluding [`Tab::All`]
    pub const SECTIONS: [Tab; 4] = [Tab::Cast, Tab::Episodes, Tab::Seasons, Tab::Details];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Cast => "Cast",
            Tab::Episodes => "Episodes",
            Tab::Seasons => "Seasons",
            Tab::Details => "More Details",
            Tab::All => "All",
        }
    }
}

/// Presentation options that do not depend on the fetched data
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub summary_policy: SummaryPolicy,
}

/// Renders the page for the given query and fetch state
///
/// While loading, skeleton blocks replace every data section. A failed fetch
/// renders only the error panel. A successful fetch renders the title card
/// followed by the selected tab.
pub fn render_page(
    query: &str,
    state: &FetchState<Show>,
    tab: Tab,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    out.push_str("TV Series Info\n");
    out.push_str(&format!("Search: {}\n\n", query));

    match state {
        FetchState::Idle => {}
        FetchState::Loading => sections::render_skeleton(&mut out),
        FetchState::Error(message) => sections::render_error(&mut out, message),
        FetchState::Success(show) => {
            sections::render_title_card(&mut out, show, options);
            out.push('\n');
            render_tab_bar(&mut out, tab);
            out.push('\n');
            render_tab(&mut out, show, tab, options);
        }
    }

    out
}

/// Renders the tab bar with the active tab highlighted
fn render_tab_bar(out: &mut String, active: Tab) {
    let labels: Vec<String> = Tab::SECTIONS
        .iter()
        .map(|&tab| {
            if tab == active || active == Tab::All {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect();

    out.push_str(&labels.join(" "));
    out.push('\n');
}

fn render_tab(out: &mut String, show: &Show, tab: Tab, options: &RenderOptions) {
    match tab {
        Tab::Cast => sections::render_cast(out, &show.embedded.cast),
        Tab::Episodes => sections::render_episodes(out, &show.embedded.episodes, options),
        Tab::Seasons => sections::render_seasons(out, &show.embedded.seasons, options),
        Tab::Details => sections::render_details(out, show),
        Tab::All => {
            for (index, section) in Tab::SECTIONS.into_iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                render_tab(out, show, section, options);
            }
        }
    }
}
