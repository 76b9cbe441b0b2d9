//! The search page controller
//!
//! A [`Page`] owns everything that outlives a single render: the current
//! query, the selected tab and the fetch hook. The locator is never stored
//! separately, it is derived from the query whenever it is needed.

use crate::fetch::{FetchHook, FetchState, Transport};
use crate::locator::{DEFAULT_API_BASE, Locator};
use crate::metadata_retrieval::Show;
use crate::view::{self, RenderOptions, Tab};
use tracing::info;

/// Query searched for when the page is opened without one
pub const DEFAULT_QUERY: &str = "stranger things";

/// Settings used to open a page
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Base URL of the TVMaze API
    pub api_base: String,
    /// Query searched for on open
    pub initial_query: String,
    /// Tab selected on open
    pub tab: Tab,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            initial_query: DEFAULT_QUERY.to_string(),
            tab: Tab::default(),
        }
    }
}

/// The lifecycle phase of the page, derived from the fetch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Success,
}

/// A search page bound to a transport
pub struct Page<Tr: Transport<Payload = Show>> {
    api_base: String,
    query: String,
    tab: Tab,
    hook: FetchHook<Tr>,
}

impl<Tr: Transport<Payload = Show>> Page<Tr> {
    /// Opens the page and starts the request for the initial query
    pub fn open(transport: Tr, config: PageConfig) -> Self {
        let mut page = Self {
            api_base: config.api_base,
            query: config.initial_query,
            tab: config.tab,
            hook: FetchHook::new(transport),
        };

        let locator = page.locator();
        page.hook.use_fetch(Some(&locator));
        page
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The request locator for the current query
    pub fn locator(&self) -> Locator {
        Locator::for_query(&self.api_base, &self.query)
    }

    /// Replaces the query and starts a new request for it
    ///
    /// Submitting the same query again still issues a fresh request.
    pub fn submit(&mut self, query: impl Into<String>) {
        self.query = query.into();
        info!(query = %self.query, "search submitted");
        self.hook.start(self.locator());
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Applies finished requests without blocking, returns whether anything changed
    pub fn poll(&mut self) -> bool {
        self.hook.poll()
    }

    /// Blocks until the current request has settled
    pub fn wait(&mut self) -> &FetchState<Show> {
        self.hook.wait()
    }

    pub fn state(&self) -> &FetchState<Show> {
        self.hook.state()
    }

    pub fn phase(&self) -> Phase {
        match self.hook.state() {
            FetchState::Idle => Phase::Idle,
            FetchState::Loading => Phase::Loading,
            FetchState::Error(_) => Phase::Error,
            FetchState::Success(_) => Phase::Success,
        }
    }

    /// Number of responses ignored because a newer search replaced them
    pub fn discarded_responses(&self) -> usize {
        self.hook.discarded_responses()
    }

    /// Renders the page as it currently stands
    pub fn render(&self, options: &RenderOptions) -> String {
        view::render_page(&self.query, self.hook.state(), self.tab, options)
    }
}
