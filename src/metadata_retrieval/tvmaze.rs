/// TVMaze metadata provider implementation.
use super::tvmaze_types::Show;
use super::MetadataRetrievalError;
use crate::fetch::Transport;
use crate::locator::Locator;
use std::time::Duration;
use tracing::debug;

/// Metadata provider for the TVMaze API.
///
/// This provider performs a plain GET on a singlesearch locator and decodes
/// the show with its embedded cast, episodes and seasons. Requests are never
/// retried and carry no timeout.
#[derive(Debug, Clone)]
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
}

impl TvMazeProvider {
    /// Creates a new TVMaze provider instance.
    pub fn new() -> Result<Self, MetadataRetrievalError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| MetadataRetrievalError::ClientSetup(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for TvMazeProvider {
    type Payload = Show;

    fn fetch(&self, locator: &Locator) -> Result<Show, MetadataRetrievalError> {
        debug!(%locator, "requesting show");

        let response = self
            .client
            .get(locator.as_str())
            .send()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        // Check if the series was found
        if response.status() == 404 {
            return Err(MetadataRetrievalError::SeriesNotFound(
                locator.query().unwrap_or_default(),
            ));
        }

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(MetadataRetrievalError::HttpStatus {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        // Parse the JSON response
        response
            .json::<Show>()
            .map_err(|e| MetadataRetrievalError::ParseError(e.to_string()))
    }
}
