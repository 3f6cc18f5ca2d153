//! In-memory collaborators for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use firstaid_core::{Coordinates, RecordingNotices};
use firstaid_gemini::{CompletionError, CompletionProvider, CompletionRequest};

use crate::geocode::ReverseGeocoder;

/// Replays queued replies in order; an exhausted queue answers `""`.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub(crate) fn replying(replies: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub(crate) fn service_unavailable() -> CompletionError {
    CompletionError::Api {
        status: 503,
        message: "The model is overloaded.".to_string(),
    }
}

pub(crate) fn notices() -> Arc<RecordingNotices> {
    Arc::new(RecordingNotices::new())
}

/// Answers every lookup with the same address.
pub(crate) struct FixedGeocoder(pub(crate) Option<String>);

impl ReverseGeocoder for FixedGeocoder {
    async fn reverse_geocode(&self, _coords: Coordinates) -> Option<String> {
        self.0.clone()
    }
}
