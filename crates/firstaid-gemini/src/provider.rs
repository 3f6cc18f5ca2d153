//! The `complete(prompt, optional image) -> text` seam.

use std::future::Future;

use crate::error::CompletionError;

/// An encoded raster image to send alongside a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// IANA media type, e.g. `image/png`.
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One completion call: which model, what to say, and optional extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub image: Option<ImagePayload>,
    /// Let the service consult its search index before answering.
    pub grounding: bool,
}

impl CompletionRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            prompt: prompt.into(),
            image: None,
            grounding: false,
        }
    }

    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_grounding(mut self, grounding: bool) -> Self {
        self.grounding = grounding;
        self
    }
}

/// A hosted text/vision model.
///
/// Implementations return the raw reply text, which may be empty. Callers
/// decide what an empty reply means.
pub trait CompletionProvider: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}

impl<T: CompletionProvider> CompletionProvider for std::sync::Arc<T> {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send {
        (**self).complete(request)
    }
}
