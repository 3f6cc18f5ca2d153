#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub vision_model: String,
    pub text_model: String,
    pub search_model: String,
    pub search_grounding: bool,
    /// Number of hospitals requested per search. Always at least 1.
    pub facility_count: u32,
    pub request_timeout_secs: u64,
    pub geocoder_base_url: String,
    pub geocoder_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_base_url", &self.gemini_base_url)
            .field("vision_model", &self.vision_model)
            .field("text_model", &self.text_model)
            .field("search_model", &self.search_model)
            .field("search_grounding", &self.search_grounding)
            .field("facility_count", &self.facility_count)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("geocoder_timeout_secs", &self.geocoder_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
