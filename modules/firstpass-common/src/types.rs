use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Verdicts and decisions ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Block,
}

/// Which gate produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Authenticity,
    Preprocessing,
}

/// One gate's verdict on an article. Decisions accumulate on the record in
/// the order the gates ran; after a Block no further decisions are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub reason: String,
    pub stage: Gate,
}

impl Decision {
    pub fn pass(stage: Gate, reason: impl Into<String>) -> Self {
        Self { verdict: Verdict::Pass, reason: reason.into(), stage }
    }

    pub fn block(stage: Gate, reason: impl Into<String>) -> Self {
        Self { verdict: Verdict::Block, reason: reason.into(), stage }
    }
}

// --- Pipeline state ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Collected,
    RiskChecked,
    AuthFiltered,
    Preprocessed,
    Blocked,
    Ready,
}

// --- Domain quality ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    Trusted,
    Unknown,
    Blacklisted,
}

/// Result of a source-trust lookup. Derived per lookup, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainQualityRecord {
    pub domain: String,
    /// Quality score in [0, 1].
    pub score: f64,
    pub status: DomainStatus,
    pub reason: String,
    /// Fixed citation for the rating provenance.
    pub reference: String,
}

// --- URL risk ---

/// Aggregate phishing-risk assessment for a URL. Warnings are in detection
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Normalized risk in [0, 100].
    pub risk_score: u8,
    pub warnings: Vec<String>,
    pub domain: String,
}

/// WHOIS registration metadata. A lookup may fail outright or return any
/// subset of fields, so every consumer treats each field as independently
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub registrar: Option<String>,
    pub name_servers: Vec<String>,
    pub registrant_email: Option<String>,
    pub dnssec: Option<String>,
    pub domain_status: Option<String>,
}

// --- Preprocessing ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessedText {
    pub cleaned: String,
    pub tokens: Vec<String>,
    pub stemmed: Vec<String>,
    /// Retained-token count; the canonical word count downstream.
    pub word_count: usize,
}

// --- Article record ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSource {
    Url,
    ManualInput,
}

/// The single entity threaded through the pipeline. Each stage layers its
/// results onto a new value via the `with_*` methods; fields are never
/// overwritten or removed, so the record is a complete audit trail of how
/// the verdict was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: Option<String>,
    /// Always lowercase with leading `www.` stripped.
    pub domain: String,
    pub title: String,
    pub content: String,
    pub collected_at: DateTime<Utc>,
    pub source: ArticleSource,

    // Stage results, in pipeline order.
    pub risk: Option<RiskAssessment>,
    pub source_trust: Option<DomainQualityRecord>,
    pub content_trust: Option<f64>,
    pub overall_authenticity: Option<f64>,
    pub preprocessed: Option<PreprocessedText>,

    pub decisions: Vec<Decision>,
    pub stage: Stage,
    pub ready_for_next_stage: bool,
}

impl ArticleRecord {
    pub fn from_url(url: impl Into<String>, domain: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Some(url.into()), domain, title, content, ArticleSource::Url)
    }

    pub fn from_text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(None, "user_input", title, content, ArticleSource::ManualInput)
    }

    fn new(
        url: Option<String>,
        domain: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        source: ArticleSource,
    ) -> Self {
        Self {
            url,
            domain: domain.into(),
            title: title.into(),
            content: content.into(),
            collected_at: Utc::now(),
            source,
            risk: None,
            source_trust: None,
            content_trust: None,
            overall_authenticity: None,
            preprocessed: None,
            decisions: Vec::new(),
            stage: Stage::Collected,
            ready_for_next_stage: false,
        }
    }

    /// Raw whitespace word count of the article body, used by the gates that
    /// run before tokenization.
    pub fn raw_word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Attach a risk assessment. The risk stage is advisory and never blocks.
    pub fn with_risk(mut self, risk: RiskAssessment) -> Self {
        self.risk = Some(risk);
        self.stage = Stage::RiskChecked;
        self
    }

    /// Attach authenticity scores plus the gate decision.
    pub fn with_authenticity(
        mut self,
        source_trust: DomainQualityRecord,
        content_trust: f64,
        overall: f64,
        decision: Decision,
    ) -> Self {
        self.source_trust = Some(source_trust);
        self.content_trust = Some(content_trust);
        self.overall_authenticity = Some(overall);
        self.stage = match decision.verdict {
            Verdict::Pass => Stage::AuthFiltered,
            Verdict::Block => Stage::Blocked,
        };
        self.decisions.push(decision);
        self
    }

    /// Attach the preprocessing outcome. This is the terminal stage:
    /// `ready_for_next_stage` is true iff the decision is Pass.
    pub fn with_preprocessing(mut self, text: Option<PreprocessedText>, decision: Decision) -> Self {
        self.preprocessed = text;
        self.stage = match decision.verdict {
            Verdict::Pass => Stage::Ready,
            Verdict::Block => Stage::Blocked,
        };
        self.ready_for_next_stage = decision.verdict == Verdict::Pass;
        self.decisions.push(decision);
        self
    }

    pub fn is_blocked(&self) -> bool {
        self.stage == Stage::Blocked
    }

    /// The most recent gate decision, if any stage has run.
    pub fn last_decision(&self) -> Option<&Decision> {
        self.decisions.last()
    }
}

/// Clamp a probability-like score to [0, 1].
pub fn clamp01(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}
