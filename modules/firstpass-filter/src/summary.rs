//! The simplified result handed to the presentation layer.

use serde::Serialize;

use firstpass_common::{ArticleRecord, RiskAssessment};

/// How many processed tokens the detail block exposes.
const DETAIL_TOKEN_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArticleVerdict {
    Genuine,
    Fake,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDetail {
    pub source_trust: f64,
    pub content_trust: f64,
    /// First processed tokens, capped.
    pub linguistic_analysis: Vec<String>,
    pub domain_check: Option<RiskAssessment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub domain: String,
    pub title: String,
    /// Overall authenticity score as a percentage.
    pub risk_score: f64,
    pub verdict: ArticleVerdict,
    /// Gate decision reasons, in the order the gates ran.
    pub warnings: Vec<String>,
    pub detailed_analysis: AnalysisDetail,
}

impl From<&ArticleRecord> for AnalysisSummary {
    fn from(record: &ArticleRecord) -> Self {
        let verdict = if record.ready_for_next_stage {
            ArticleVerdict::Genuine
        } else {
            ArticleVerdict::Fake
        };

        let tokens = record
            .preprocessed
            .as_ref()
            .map(|p| p.tokens.iter().take(DETAIL_TOKEN_LIMIT).cloned().collect())
            .unwrap_or_default();

        Self {
            domain: record.domain.clone(),
            title: record.title.clone(),
            risk_score: record.overall_authenticity.unwrap_or(0.0) * 100.0,
            verdict,
            warnings: record.decisions.iter().map(|d| d.reason.clone()).collect(),
            detailed_analysis: AnalysisDetail {
                source_trust: record.source_trust.as_ref().map(|s| s.score).unwrap_or(0.0),
                content_trust: record.content_trust.unwrap_or(0.0),
                linguistic_analysis: tokens,
                domain_check: record.risk.clone(),
            },
        }
    }
}
