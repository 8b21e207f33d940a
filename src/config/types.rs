use serde::Deserialize;

/// Origin prepended to relative "next page" links
pub const DEFAULT_SITE_ORIGIN: &str = "https://arxiv.org";

/// Browser-identifying header sent with every listing request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for arxiv-harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Locally stored first listing page the crawl starts from
    #[serde(rename = "seed-page")]
    pub seed_page: String,

    /// Directory receiving one markup file per crawled page
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// Newline-delimited log of every visited page URL
    #[serde(rename = "link-log")]
    pub link_log: String,

    /// Scheme and host prefixed to relative next-page links
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    /// Pause between successive requests (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout; the transport default applies when unset
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_page: "1.html".to_string(),
            output_dir: "page_html".to_string(),
            link_log: "page_links.txt".to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            delay_ms: 2000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Record extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Directory of stored listing pages
    #[serde(rename = "input-dir")]
    pub input_dir: String,

    /// Path of the Markdown report
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Only files with this extension are read (no leading dot)
    #[serde(rename = "file-extension")]
    pub file_extension: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_dir: "page_html".to_string(),
            report_path: "report.md".to_string(),
            file_extension: "html".to_string(),
        }
    }
}
