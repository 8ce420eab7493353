//! The authenticity gate: weighted blend of source trust and content
//! heuristics, with a hard floor on article length.

use std::sync::Arc;

use tracing::info;

use firstpass_common::{clamp01, ArticleRecord, Decision, Gate};
use firstpass_quality::SourceScorer;

use crate::content::content_score;

/// Weight of the source-trust score in the overall blend.
const SOURCE_WEIGHT: f64 = 0.6;
/// Weight of the content-heuristic score in the overall blend.
const CONTENT_WEIGHT: f64 = 0.4;

/// Overall scores below this are blocked outright.
const MIN_AUTHENTICITY: f64 = 0.3;
/// Articles shorter than this many raw words cannot be analyzed reliably.
const MIN_ANALYZABLE_WORDS: usize = 20;

pub struct AuthenticityFilter {
    scorer: Arc<dyn SourceScorer>,
}

impl AuthenticityFilter {
    pub fn new(scorer: Arc<dyn SourceScorer>) -> Self {
        Self { scorer }
    }

    /// Run the gate and layer its scores plus decision onto the record.
    pub fn apply(&self, record: ArticleRecord) -> ArticleRecord {
        let source = self.scorer.lookup(&record.domain);
        let content = content_score(&record.title, &record.content);
        let overall = combine(source.score, content);

        let decision = if overall < MIN_AUTHENTICITY {
            Decision::block(Gate::Authenticity, "Low authenticity score")
        } else if record.raw_word_count() < MIN_ANALYZABLE_WORDS {
            Decision::block(Gate::Authenticity, "Insufficient content")
        } else {
            Decision::pass(Gate::Authenticity, "Passed authenticity check")
        };

        info!(
            domain = %record.domain,
            source_score = source.score,
            content_score = content,
            overall,
            verdict = ?decision.verdict,
            "Authenticity gate"
        );

        record.with_authenticity(source, content, overall, decision)
    }
}

/// Weighted overall authenticity; monotonically non-decreasing in both
/// operands.
pub fn combine(source: f64, content: f64) -> f64 {
    clamp01(SOURCE_WEIGHT * source + CONTENT_WEIGHT * content)
}
