//! First-aid guidance from an injury photo or description.

use std::sync::Arc;

use firstaid_core::{Notice, NoticeSink};
use firstaid_gemini::{CompletionProvider, CompletionRequest};

use crate::error::{report_failure, AssistError};
use crate::photo::load_injury_image;
use crate::prompts::{first_aid_prompt, IMAGE_ANALYSIS_PROMPT};

pub const NO_DESCRIPTION_DETECTED: &str = "No description detected.";
pub const IMAGE_ANALYSIS_FAILED: &str = "Unable to analyze the image.";
pub const NO_STEPS_GENERATED: &str = "No first aid steps generated.";
pub const STEPS_GENERATION_FAILED: &str = "Unable to generate first aid instructions.";

/// Result of one guide-mode action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideOutcome {
    /// Model description of the photo, when a photo was supplied.
    pub analysis: Option<String>,
    pub steps: String,
}

/// Calls the vision and text models for first-aid guidance.
///
/// Every public method returns display text. Provider failures are logged,
/// reported through the notice sink, and replaced with a fixed fallback.
pub struct FirstAidGuide<P> {
    provider: P,
    notices: Arc<dyn NoticeSink>,
    vision_model: String,
    text_model: String,
}

impl<P: CompletionProvider> FirstAidGuide<P> {
    pub fn new(
        provider: P,
        notices: Arc<dyn NoticeSink>,
        vision_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            notices,
            vision_model: vision_model.into(),
            text_model: text_model.into(),
        }
    }

    /// Describes the injury visible in `image_bytes`.
    ///
    /// Returns [`NO_DESCRIPTION_DETECTED`] for an empty reply and
    /// [`IMAGE_ANALYSIS_FAILED`] when the image is unreadable or the call fails.
    pub async fn analyze_image(&self, image_bytes: &[u8]) -> String {
        match self.try_analyze_image(image_bytes).await {
            Ok(text) => text,
            Err(e) => {
                report_failure(self.notices.as_ref(), &e, "Error analyzing image");
                IMAGE_ANALYSIS_FAILED.to_string()
            }
        }
    }

    /// Step-by-step first aid for `description`.
    ///
    /// Returns [`NO_STEPS_GENERATED`] for an empty reply and
    /// [`STEPS_GENERATION_FAILED`] when the description is blank or the call fails.
    pub async fn generate_first_aid_steps(&self, description: &str) -> String {
        match self.try_generate_steps(description).await {
            Ok(text) => text,
            Err(e) => {
                report_failure(self.notices.as_ref(), &e, "Error generating first aid steps");
                STEPS_GENERATION_FAILED.to_string()
            }
        }
    }

    /// Guide mode: a photo takes precedence over a typed description.
    ///
    /// With a photo, its analysis feeds the step prompt. With neither input a
    /// warning is raised and `None` is returned.
    pub async fn run(
        &self,
        image_bytes: Option<&[u8]>,
        description: Option<&str>,
    ) -> Option<GuideOutcome> {
        let description = description.map(str::trim).filter(|d| !d.is_empty());

        if let Some(bytes) = image_bytes {
            let analysis = match self.try_analyze_image(bytes).await {
                Ok(text) => {
                    if text != NO_DESCRIPTION_DETECTED {
                        self.notices
                            .notify(Notice::success("✅ Image analyzed successfully."));
                    }
                    Some(text)
                }
                Err(e) => {
                    report_failure(self.notices.as_ref(), &e, "Error analyzing image");
                    None
                }
            };

            // Steps come from the photo analysis when there is one, otherwise
            // from the typed description.
            let basis = match (&analysis, description) {
                (Some(text), _) if text != NO_DESCRIPTION_DETECTED => Some(text.as_str()),
                (_, Some(typed)) => Some(typed),
                _ => None,
            };
            let steps = match basis {
                Some(basis) => self.generate_first_aid_steps(basis).await,
                None => STEPS_GENERATION_FAILED.to_string(),
            };

            return Some(GuideOutcome {
                analysis: Some(analysis.unwrap_or_else(|| IMAGE_ANALYSIS_FAILED.to_string())),
                steps,
            });
        }

        if let Some(description) = description {
            let steps = match self.try_generate_steps(description).await {
                Ok(text) => {
                    self.notices
                        .notify(Notice::success("✅ First aid advice ready."));
                    text
                }
                Err(e) => {
                    report_failure(
                        self.notices.as_ref(),
                        &e,
                        "Error generating first aid steps",
                    );
                    STEPS_GENERATION_FAILED.to_string()
                }
            };
            return Some(GuideOutcome {
                analysis: None,
                steps,
            });
        }

        self.notices.notify(Notice::warning(
            "Please upload an image or describe the injury.",
        ));
        None
    }

    async fn try_analyze_image(&self, image_bytes: &[u8]) -> Result<String, AssistError> {
        let image = load_injury_image(image_bytes)?;
        let request =
            CompletionRequest::text(&self.vision_model, IMAGE_ANALYSIS_PROMPT).with_image(image);
        let reply = self.provider.complete(request).await?;
        Ok(non_empty_or(&reply, NO_DESCRIPTION_DETECTED))
    }

    async fn try_generate_steps(&self, description: &str) -> Result<String, AssistError> {
        if description.trim().is_empty() {
            return Err(AssistError::EmptyDescription);
        }
        let request = CompletionRequest::text(&self.text_model, first_aid_prompt(description));
        let reply = self.provider.complete(request).await?;
        Ok(non_empty_or(&reply, NO_STEPS_GENERATED))
    }
}

/// Trimmed `reply`, or `fallback` when nothing is left.
pub(crate) fn non_empty_or(reply: &str, fallback: &str) -> String {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;
