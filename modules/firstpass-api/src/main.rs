use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use firstpass_collect::HttpCollector;
use firstpass_common::{Config, SourceScoring};
use firstpass_filter::{AuthenticityFilter, Pipeline, Preprocessor, PreprocessorConfig};
use firstpass_quality::{DomainQualityTable, SourceScorer, StaticListScorer};
use firstpass_risk::{HttpRedirectProbe, RiskLists, UrlRiskAnalyzer, WhoisXmlClient};

mod rest;

pub struct AppState {
    pub pipeline: Pipeline,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("firstpass=info".parse()?))
        .init();

    let config = Config::from_env();

    // The reference data is fatal to get wrong; everything past startup
    // degrades to warnings instead.
    let scorer: Arc<dyn SourceScorer> = match config.source_scoring {
        SourceScoring::Dataset => {
            let path = config
                .domain_quality_path
                .as_deref()
                .context("DOMAIN_QUALITY_PATH is required for dataset scoring")?;
            Arc::new(
                DomainQualityTable::load(path)
                    .context("failed to load domain quality dataset")?,
            )
        }
        SourceScoring::StaticList => match &config.source_lists_path {
            Some(path) => Arc::new(
                StaticListScorer::from_file(path).context("failed to load source lists")?,
            ),
            None => Arc::new(StaticListScorer::default()),
        },
    };

    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs);
    let risk = match &config.whoisxml_api_key {
        Some(key) => {
            let lists = match &config.risk_lists_path {
                Some(path) => RiskLists::from_file(path).context("failed to load risk lists")?,
                None => RiskLists::default(),
            };
            Some(Arc::new(UrlRiskAnalyzer::new(
                lists,
                Some(Arc::new(WhoisXmlClient::new(
                    key,
                    Duration::from_secs(config.whois_timeout_secs),
                ))),
                Arc::new(HttpRedirectProbe::new(fetch_timeout)),
            )))
        }
        None => {
            info!("No WHOIS credential configured; URL risk analysis disabled");
            None
        }
    };

    let pipeline = Pipeline::new(
        Arc::new(HttpCollector::new(fetch_timeout)),
        risk,
        AuthenticityFilter::new(scorer),
        Preprocessor::new(PreprocessorConfig {
            min_words: config.min_article_words,
            max_words: config.max_article_words,
            ..PreprocessorConfig::default()
        }),
    );

    let state = Arc::new(AppState { pipeline });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/analyze", post(rest::analyze))
        .with_state(state)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only (no query params)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("firstpass API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
