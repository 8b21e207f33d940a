use crate::config::types::{Config, CrawlerConfig, ExtractorConfig};
use crate::ConfigError;
use url::Url;

const MAX_DELAY_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_extractor_config(&config.extractor)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    require_non_empty("seed_page", &config.seed_page)?;
    require_non_empty("output_dir", &config.output_dir)?;
    require_non_empty("link_log", &config.link_log)?;
    require_non_empty("user_agent", &config.user_agent)?;

    validate_site_origin(&config.site_origin)?;

    if config.delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "delay_ms must be <= {}ms, got {}ms",
            MAX_DELAY_MS, config.delay_ms
        )));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates extractor configuration
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    require_non_empty("input_dir", &config.input_dir)?;
    require_non_empty("report_path", &config.report_path)?;
    require_non_empty("file_extension", &config.file_extension)?;

    if config.file_extension.starts_with('.') {
        return Err(ConfigError::Validation(format!(
            "file_extension must not start with '.', got '{}'",
            config.file_extension
        )));
    }

    Ok(())
}

/// The origin is glued directly in front of an absolute path, so it must be
/// a bare `scheme://host[:port]` without a trailing slash.
fn validate_site_origin(origin: &str) -> Result<(), ConfigError> {
    let url = Url::parse(origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site_origin '{}': {}", origin, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "site_origin '{}' must use http or https",
            origin
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "site_origin '{}' has no host",
            origin
        )));
    }

    if origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "site_origin '{}' must not end with '/'",
            origin
        )));
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}
