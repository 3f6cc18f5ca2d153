use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let gemini_api_key = require("GEMINI_API_KEY")?;

    let env = parse_environment(&or_default("FIRSTAID_ENV", "development"));
    let log_level = or_default("FIRSTAID_LOG_LEVEL", "info");

    let gemini_base_url = or_default("FIRSTAID_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let vision_model = or_default("FIRSTAID_VISION_MODEL", DEFAULT_MODEL);
    let text_model = or_default("FIRSTAID_TEXT_MODEL", DEFAULT_MODEL);
    let search_model = or_default("FIRSTAID_SEARCH_MODEL", DEFAULT_MODEL);
    let search_grounding = parse_bool("FIRSTAID_SEARCH_GROUNDING", "true")?;

    let facility_count = parse_u32("FIRSTAID_FACILITY_COUNT", "3")?;
    if facility_count == 0 {
        return Err(invalid(
            "FIRSTAID_FACILITY_COUNT",
            "must be at least 1".to_string(),
        ));
    }

    let request_timeout_secs = parse_u64("FIRSTAID_REQUEST_TIMEOUT_SECS", "30")?;
    let geocoder_base_url = or_default("FIRSTAID_GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL);
    let geocoder_timeout_secs = parse_u64("FIRSTAID_GEOCODER_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("FIRSTAID_USER_AGENT", "firstaid/0.1 (first-aid-assistant)");

    Ok(AppConfig {
        env,
        log_level,
        gemini_api_key,
        gemini_base_url,
        vision_model,
        text_model,
        search_model,
        search_grounding,
        facility_count,
        request_timeout_secs,
        geocoder_base_url,
        geocoder_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
