//! `guide` command: photo and/or description in, first-aid steps out.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use firstaid_assist::{FirstAidGuide, GuideOutcome};
use firstaid_core::{AppConfig, NoticeSink};
use firstaid_gemini::GeminiClient;

/// Runs guide mode and prints the outcome to stdout.
///
/// # Errors
///
/// Returns an error if the image file cannot be read or the Gemini client
/// cannot be constructed. Service failures are reported as notices instead.
pub(crate) async fn run_guide(
    config: &AppConfig,
    notices: Arc<dyn NoticeSink>,
    image: Option<&Path>,
    description: Option<&str>,
) -> anyhow::Result<()> {
    let image_bytes = match image {
        Some(path) => Some(
            tokio::fs::read(path)
                .await
                .map_err(|e| anyhow::anyhow!("failed to read image {}: {e}", path.display()))?,
        ),
        None => None,
    };

    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.gemini_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Gemini client: {e}"))?;

    let guide = FirstAidGuide::new(client, notices, &config.vision_model, &config.text_model);
    if let Some(outcome) = guide.run(image_bytes.as_deref(), description).await {
        print!("{}", render_guide(&outcome));
    }
    Ok(())
}

pub(crate) fn render_guide(outcome: &GuideOutcome) -> String {
    let mut out = String::new();
    if let Some(analysis) = &outcome.analysis {
        let _ = writeln!(out, "Analysis Result: {analysis}\n");
    }
    let _ = writeln!(out, "First Aid Steps");
    let _ = writeln!(out, "{}", outcome.steps);
    out
}
