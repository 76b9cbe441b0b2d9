/// Show metadata retrieval from the TVMaze API.
///
/// This module provides the structures describing a TVMaze show payload
/// (cast, episodes, seasons and the show details), as well as the transport
/// that fetches it over HTTP.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeProvider;
pub use tvmaze_types::{
    CastMember, Character, Country, Embedded, Episode, Externals, Image, Network, Person, Rating,
    Schedule, Season, Show, WebChannel,
};

use thiserror::Error;

/// Errors that can occur during metadata retrieval operations.
///
/// The `Display` output of these errors is what ends up in front of the user,
/// so every variant reads as a complete sentence fragment.
#[derive(Debug, Error)]
pub enum MetadataRetrievalError {
    /// The HTTP client could not be constructed
    #[error("Failed to set up HTTP client: {0}")]
    ClientSetup(String),

    /// Request to the metadata provider failed on the network level
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The provider answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The requested series was not found
    #[error("Series not found: '{0}'")]
    SeriesNotFound(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}
