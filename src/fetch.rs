//! Fetch lifecycle management
//!
//! The [`FetchHook`] turns a locator into an observable fetch state. Every
//! started request gets a fresh generation number and runs on its own worker
//! thread. Workers report back through a channel that only the hook reads,
//! and a completion is applied only if its generation is still the current
//! one. Responses for superseded locators are dropped without touching the
//! visible state.

use crate::locator::Locator;
use crate::metadata_retrieval::MetadataRetrievalError;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a fetch lifecycle
#[derive(Debug, Error)]
pub enum FetchError {
    /// The worker thread for the request could not be started
    #[error("Failed to start request: {0}")]
    SpawnFailed(#[source] io::Error),

    /// The transport reported a network, HTTP or decoding failure
    #[error(transparent)]
    Retrieval(#[from] MetadataRetrievalError),
}

/// Performs a single blocking request for a locator
///
/// Implementors are shared with worker threads, hence the `Send + Sync`
/// bounds.
pub trait Transport: Send + Sync + 'static {
    /// The decoded response body
    type Payload: Send + 'static;

    /// Fetches and decodes the resource behind the locator
    fn fetch(&self, locator: &Locator) -> Result<Self::Payload, MetadataRetrievalError>;
}

/// Observable state of one fetch lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No locator is associated, nothing was requested
    Idle,
    /// A request is in flight
    Loading,
    /// The request completed and its body was decoded
    Success(T),
    /// The request failed, carrying a human-readable message
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The decoded payload, present only after a successful request
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The error message, present only after a failed request
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Message posted by a worker thread once its request settles
struct Completion<T> {
    generation: u64,
    locator: Locator,
    result: Result<T, FetchError>,
}

/// Drives fetch lifecycles for a changing locator
pub struct FetchHook<Tr: Transport> {
    transport: Arc<Tr>,
    locator: Option<Locator>,
    generation: u64,
    state: FetchState<Tr::Payload>,
    sender: Sender<Completion<Tr::Payload>>,
    receiver: Receiver<Completion<Tr::Payload>>,
    discarded: usize,
}

impl<Tr: Transport> FetchHook<Tr> {
    pub fn new(transport: Tr) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            transport: Arc::new(transport),
            locator: None,
            generation: 0,
            state: FetchState::Idle,
            sender,
            receiver,
            discarded: 0,
        }
    }

    /// Associates the hook with a locator and returns the current state
    ///
    /// A request is only started when the locator differs from the one
    /// already associated. Passing `None` detaches the hook: the state
    /// returns to [`FetchState::Idle`] and any in-flight response is ignored.
    pub fn use_fetch(&mut self, locator: Option<&Locator>) -> &FetchState<Tr::Payload> {
        match locator {
            Some(locator) if self.locator.as_ref() != Some(locator) => self.start(locator.clone()),
            None if self.locator.is_some() => self.reset(),
            _ => {}
        }

        self.poll();
        &self.state
    }

    /// Starts a new lifecycle for the locator, discarding the previous state
    ///
    /// This always issues a request, even if the same locator was fetched
    /// before. Results are never memoized.
    pub fn start(&mut self, locator: Locator) {
        self.generation += 1;
        let generation = self.generation;

        self.locator = Some(locator.clone());
        self.state = FetchState::Loading;
        info!(generation, %locator, "starting request");

        let transport = Arc::clone(&self.transport);
        let sender = self.sender.clone();
        let spawned = thread::Builder::new()
            .name(format!("fetch-{generation}"))
            .spawn(move || {
                let result = transport.fetch(&locator).map_err(FetchError::from);
                // The hook may have been dropped meanwhile, nobody is left to tell
                let _ = sender.send(Completion {
                    generation,
                    locator,
                    result,
                });
            });

        if let Err(e) = spawned {
            let error = FetchError::SpawnFailed(e);
            warn!(generation, %error, "request could not be started");
            self.state = FetchState::Error(error.to_string());
        }
    }

    /// Detaches the hook from its locator
    pub fn reset(&mut self) {
        self.generation += 1;
        self.locator = None;
        self.state = FetchState::Idle;
    }

    /// Applies all completions that have arrived so far without blocking
    ///
    /// Returns whether the visible state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.receiver.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Blocks until the current lifecycle has settled
    ///
    /// There is no timeout: a request that never returns blocks forever.
    pub fn wait(&mut self) -> &FetchState<Tr::Payload> {
        self.poll();

        while self.state.is_loading() {
            // The hook owns a sender, so the channel cannot disconnect
            match self.receiver.recv() {
                Ok(completion) => {
                    self.apply(completion);
                }
                Err(_) => break,
            }
        }

        &self.state
    }

    pub fn state(&self) -> &FetchState<Tr::Payload> {
        &self.state
    }

    /// The locator of the current lifecycle
    pub fn locator(&self) -> Option<&Locator> {
        self.locator.as_ref()
    }

    /// The generation of the current lifecycle
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of responses dropped because their locator had been superseded
    pub fn discarded_responses(&self) -> usize {
        self.discarded
    }

    fn apply(&mut self, completion: Completion<Tr::Payload>) -> bool {
        if completion.generation != self.generation || !self.state.is_loading() {
            self.discarded += 1;
            debug!(
                generation = completion.generation,
                current = self.generation,
                locator = %completion.locator,
                "discarding stale response"
            );
            return false;
        }

        self.state = match completion.result {
            Ok(payload) => {
                info!(generation = completion.generation, "request succeeded");
                FetchState::Success(payload)
            }
            Err(error) => {
                warn!(generation = completion.generation, %error, "request failed");
                FetchState::Error(error.to_string())
            }
        };

        true
    }
}
