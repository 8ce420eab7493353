use std::env;

/// How source trust is scored: against the expert-rated quality dataset or
/// against the static trusted/blacklisted lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceScoring {
    Dataset,
    StaticList,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Source scoring
    pub source_scoring: SourceScoring,
    pub domain_quality_path: Option<String>,
    pub source_lists_path: Option<String>,

    // URL risk analysis
    pub whoisxml_api_key: Option<String>,
    pub risk_lists_path: Option<String>,

    // Preprocessing thresholds
    pub min_article_words: usize,
    pub max_article_words: usize,

    // Network timeouts (seconds)
    pub fetch_timeout_secs: u64,
    pub whois_timeout_secs: u64,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let source_scoring = match env::var("SOURCE_SCORING").as_deref() {
            Ok("static") => SourceScoring::StaticList,
            _ => SourceScoring::Dataset,
        };

        let domain_quality_path = match source_scoring {
            // Dataset mode cannot start without the reference file.
            SourceScoring::Dataset => Some(required_env("DOMAIN_QUALITY_PATH")),
            SourceScoring::StaticList => env::var("DOMAIN_QUALITY_PATH").ok(),
        };

        Self {
            source_scoring,
            domain_quality_path,
            source_lists_path: env::var("SOURCE_LISTS_PATH").ok(),
            whoisxml_api_key: env::var("WHOISXML_API_KEY").ok().filter(|k| !k.is_empty()),
            risk_lists_path: env::var("RISK_LISTS_PATH").ok(),
            min_article_words: env_usize("MIN_ARTICLE_WORDS", 50),
            max_article_words: env_usize("MAX_ARTICLE_WORDS", 10_000),
            fetch_timeout_secs: env_u64("FETCH_TIMEOUT_SECS", 15),
            whois_timeout_secs: env_u64("WHOIS_TIMEOUT_SECS", 10),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
