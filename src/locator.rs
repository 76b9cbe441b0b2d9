//! Request locators
//!
//! A locator is the complete request URL for a show search. It is derived
//! from the search query and never edited afterwards: a new query always
//! produces a new locator.

use std::fmt;

/// Base URL of the public TVMaze API
pub const DEFAULT_API_BASE: &str = "https://api.tvmaze.com";

/// Sub-resources requested alongside every show
const EMBEDDED_RESOURCES: [&str; 3] = ["cast", "episodes", "seasons"];

/// The fully constructed request URL for a show search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Builds the singlesearch locator for the given query
    ///
    /// The query is percent-encoded and the cast, episodes and seasons
    /// resources are requested as embeds. An empty query still yields a
    /// valid locator with an empty `q` parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tv_series_info::Locator;
    ///
    /// let locator = Locator::for_query("https://api.tvmaze.com", "stranger things");
    /// assert_eq!(
    ///     locator.as_str(),
    ///     "https://api.tvmaze.com/singlesearch/shows?q=stranger%20things&embed[]=cast&embed[]=episodes&embed[]=seasons"
    /// );
    /// ```
    pub fn for_query(api_base: &str, query: &str) -> Self {
        let mut url = format!(
            "{}/singlesearch/shows?q={}",
            api_base.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        for resource in EMBEDDED_RESOURCES {
            url.push_str("&embed[]=");
            url.push_str(resource);
        }

        Self(url)
    }

    /// Wraps an already constructed URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the decoded search query carried by this locator, if any
    pub fn query(&self) -> Option<String> {
        let url = reqwest::Url::parse(&self.0).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
