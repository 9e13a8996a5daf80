use crate::format::Format;

#[derive(Clone)]
pub struct AppConfig {
    /// Catalog API base URL; request paths are resolved against its origin.
    pub api_base: String,
    /// Sent verbatim in the `x-api-key` header.
    pub api_key: String,
    pub log_level: String,
    pub format: Format,
    pub page_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("format", &self.format)
            .field("page_limit", &self.page_limit)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
