use crate::app_config::AppConfig;
use crate::format::Format;
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base = require("PRODCAT_API_BASE")?;
    let api_key = require("PRODCAT_API_KEY")?;

    let log_level = or_default("PRODCAT_LOG_LEVEL", "info");

    let format = or_default("PRODCAT_FORMAT", "json")
        .parse::<Format>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "PRODCAT_FORMAT".to_string(),
            reason,
        })?;

    let page_limit = parse_u32("PRODCAT_PAGE_LIMIT", "12")?;
    if page_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRODCAT_PAGE_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("PRODCAT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PRODCAT_USER_AGENT", "prodcat/0.1 (catalog-client)");

    Ok(AppConfig {
        api_base,
        api_key,
        log_level,
        format,
        page_limit,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
