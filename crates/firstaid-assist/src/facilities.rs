//! Nearby-hospital search through the completion service.

use std::sync::Arc;

use firstaid_core::{FacilityResultSet, LocationQuery, NoticeSink};
use firstaid_gemini::{CompletionProvider, CompletionRequest};

use crate::error::{report_failure, AssistError};
use crate::guide::non_empty_or;
use crate::parse::parse_facilities;
use crate::prompts::{facility_search_prompt, EMERGENCY_ASSISTANT_ROLE};

pub const NO_HOSPITALS_FOUND: &str = "⚠️ No hospitals found. Try another location.";
pub const SEARCH_FAILED: &str =
    "⚠️ Could not search for hospitals. Please check your Gemini API key and network connection.";

/// Asks the model for the nearest hospitals to a location.
pub struct FacilitySearch<P> {
    provider: P,
    notices: Arc<dyn NoticeSink>,
    model: String,
    facility_count: u32,
    grounding: bool,
}

impl<P: CompletionProvider> FacilitySearch<P> {
    pub fn new(
        provider: P,
        notices: Arc<dyn NoticeSink>,
        model: impl Into<String>,
        facility_count: u32,
        grounding: bool,
    ) -> Self {
        Self {
            provider,
            notices,
            model: model.into(),
            facility_count: facility_count.max(1),
            grounding,
        }
    }

    /// The request sent for `query`.
    #[must_use]
    pub fn request_for(&self, query: &LocationQuery) -> CompletionRequest {
        CompletionRequest::text(
            &self.model,
            facility_search_prompt(query, self.facility_count),
        )
        .with_system_instruction(EMERGENCY_ASSISTANT_ROLE)
        .with_grounding(self.grounding)
    }

    /// Raw reply text listing nearby hospitals.
    ///
    /// Returns [`NO_HOSPITALS_FOUND`] for an empty reply and [`SEARCH_FAILED`]
    /// when the call fails; the failure is also reported as a notice.
    pub async fn find_nearby_facilities(&self, query: &LocationQuery) -> String {
        match self.try_find(query).await {
            Ok(text) => text,
            Err(e) => {
                report_failure(self.notices.as_ref(), &e, "Error finding facilities");
                SEARCH_FAILED.to_string()
            }
        }
    }

    /// Runs the search and parses the reply in one step.
    pub async fn search(&self, query: &LocationQuery) -> (String, FacilityResultSet) {
        let raw = self.find_nearby_facilities(query).await;
        let facilities = parse_facilities(&raw);
        tracing::info!(
            facilities = facilities.len(),
            mappable = facilities.mappable().count(),
            "facility search complete"
        );
        (raw, facilities)
    }

    async fn try_find(&self, query: &LocationQuery) -> Result<String, AssistError> {
        let reply = self.provider.complete(self.request_for(query)).await?;
        Ok(non_empty_or(&reply, NO_HOSPITALS_FOUND))
    }
}
