//! TV Series Info - search TVMaze and browse a show from the terminal
//!
//! This library provides the fetch lifecycle for show searches, the TVMaze
//! payload types, and the text rendering of the resulting page.
//!
//! # Examples
//!
//! ```no_run
//! use tv_series_info::{Page, PageConfig, RenderOptions, TvMazeProvider};
//!
//! let provider = TvMazeProvider::new().unwrap();
//! let mut page = Page::open(provider, PageConfig::default());
//!
//! page.wait();
//! println!("{}", page.render(&RenderOptions::default()));
//!
//! page.submit("the wire");
//! page.wait();
//! println!("{}", page.render(&RenderOptions::default()));
//! ```

mod fetch;
mod locator;
mod metadata_retrieval;
mod page;
mod view;

pub use fetch::{FetchError, FetchHook, FetchState, Transport};
pub use locator::{DEFAULT_API_BASE, Locator};
pub use metadata_retrieval::{
    CastMember, Character, Country, Embedded, Episode, Externals, Image, MetadataRetrievalError,
    Network, Person, Rating, Schedule, Season, Show, TvMazeProvider, WebChannel,
};
pub use page::{DEFAULT_QUERY, Page, PageConfig, Phase};
pub use view::{NOT_AVAILABLE, RenderOptions, SummaryPolicy, Tab, format_date, render_page};

use thiserror::Error;

/// Top-level error type for TV Series Info operations
#[derive(Debug, Error)]
pub enum TvSeriesInfoError {
    /// Error during metadata retrieval
    #[error("Metadata retrieval error: {0}")]
    MetadataRetrieval(#[from] MetadataRetrievalError),

    /// Error while reading interactive input
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
