//! Stage-1 pipeline orchestrator. Sequences collection, optional URL risk
//! analysis, the authenticity gate, and the preprocessing gate, stopping at
//! the first Block. Each request is an independent unit of work; nothing is
//! shared between requests beyond the immutable scorer and lists.

use std::sync::Arc;

use tracing::info;

use firstpass_collect::{collect_from_text, ContentCollector};
use firstpass_common::{ArticleRecord, FirstPassError};
use firstpass_risk::UrlRiskAnalyzer;

use crate::authenticity::AuthenticityFilter;
use crate::preprocess::Preprocessor;

pub struct Pipeline {
    collector: Arc<dyn ContentCollector>,
    /// None disables the risk stage entirely (no WHOIS configuration).
    risk: Option<Arc<UrlRiskAnalyzer>>,
    authenticity: AuthenticityFilter,
    preprocessor: Preprocessor,
}

impl Pipeline {
    pub fn new(
        collector: Arc<dyn ContentCollector>,
        risk: Option<Arc<UrlRiskAnalyzer>>,
        authenticity: AuthenticityFilter,
        preprocessor: Preprocessor,
    ) -> Self {
        Self { collector, risk, authenticity, preprocessor }
    }

    /// Collect a URL-sourced article and run it through every stage.
    /// A collection failure aborts the request; no record is produced.
    pub async fn process_url(&self, url: &str) -> Result<ArticleRecord, FirstPassError> {
        info!(url, "Processing URL");
        let record = self.collector.collect(url).await?;

        let record = match (&self.risk, record.url.clone()) {
            (Some(analyzer), Some(url)) => {
                let assessment = analyzer.assess(&url).await;
                record.with_risk(assessment)
            }
            _ => record,
        };

        Ok(self.run_gates(record))
    }

    /// Run raw text through the gates. Text input has no URL, so the risk
    /// stage never applies.
    pub fn process_text(&self, text: &str, title: &str) -> ArticleRecord {
        info!(title, "Processing text input");
        self.run_gates(collect_from_text(text, title))
    }

    fn run_gates(&self, record: ArticleRecord) -> ArticleRecord {
        let record = self.authenticity.apply(record);
        if record.is_blocked() {
            return record;
        }
        self.preprocessor.apply(record)
    }
}
