//! Static-list source scorer: the dataset-free fallback strategy. Trusted
//! and blacklisted domain lists are injected at construction; the compiled-in
//! defaults can be replaced from a JSON file without a rebuild.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use firstpass_common::{normalize_domain, DomainQualityRecord, FirstPassError};

use crate::{status_for, SourceScorer, RESEARCH_REFERENCE};

const DEFAULT_TRUSTED: &[&str] = &[
    "reuters.com",
    "bbc.com",
    "cnn.com",
    "ap.org",
    "nytimes.com",
    "theguardian.com",
    "washingtonpost.com",
    "timesofindia.indiatimes.com",
    "hindustantimes.com",
    "ndtv.com",
];

const DEFAULT_BLACKLISTED: &[&str] = &[
    "opindia.com",
    "indianewsnetwork.com",
    "indiavsdisinformation.com",
    "jigyasaonline.org",
    "centralexcisegov.in",
    "register-for-your-free-scholarship.blogspot.com",
    "kusmyojna.in",
    "kvms.org.in",
    "sajks.com",
    "register-form-free-tablet.blogspot.com",
    "nragov.online",
    "thehindu-news.com",
    "ndtv-update.in",
    "timesofindia-live.in",
    "hindustantimes-today.in",
    "news18-digital.in",
    "moneycontrol-finance.in",
    "jagran-times.in",
    "zee5-breaking.in",
    "abp-live.in",
    "india-tv-news.in",
    "aajtak-live.com",
    "timesofislamabad.com",
    "globalvillagespace.com",
    "pakobserver.net",
    "dailytimes.com.pk",
    "urdupoint.com",
    "thecurrent.pk",
    "thenews.com.pk",
    "globaltimes.cn",
    "xinhuanet.com",
    "cgtn.com",
    "chinadaily.com.cn",
    "people.cn",
    "cri.cn",
];

#[derive(Debug, Deserialize)]
struct SourceListsFile {
    #[serde(default)]
    trusted: Vec<String>,
    #[serde(default)]
    blacklisted: Vec<String>,
}

pub struct StaticListScorer {
    trusted: Vec<String>,
    blacklisted: HashSet<String>,
}

impl Default for StaticListScorer {
    fn default() -> Self {
        Self {
            trusted: DEFAULT_TRUSTED.iter().map(|d| d.to_string()).collect(),
            blacklisted: DEFAULT_BLACKLISTED.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl StaticListScorer {
    pub fn new(trusted: Vec<String>, blacklisted: Vec<String>) -> Self {
        Self {
            trusted: trusted.into_iter().map(|d| normalize_domain(&d)).collect(),
            blacklisted: blacklisted.into_iter().map(|d| normalize_domain(&d)).collect(),
        }
    }

    /// Load lists from a JSON file of `{"trusted": [...], "blacklisted": [...]}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FirstPassError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FirstPassError::Dataset(format!("cannot read {}: {e}", path.display()))
        })?;
        let lists: SourceListsFile = serde_json::from_str(&raw).map_err(|e| {
            FirstPassError::Dataset(format!("{}: invalid source lists: {e}", path.display()))
        })?;
        info!(
            path = %path.display(),
            trusted = lists.trusted.len(),
            blacklisted = lists.blacklisted.len(),
            "Loaded source lists"
        );
        Ok(Self::new(lists.trusted, lists.blacklisted))
    }

    fn score(&self, domain: &str) -> (f64, &'static str) {
        if self.blacklisted.contains(domain) {
            return (0.0, "Domain is on the blacklisted source list.");
        }
        if self.trusted.iter().any(|trusted| domain.contains(trusted.as_str())) {
            return (0.8, "Domain matches a trusted source.");
        }
        // Deeply nested hostnames are a common impersonation pattern.
        if domain.matches('.').count() > 2 {
            return (0.2, "Domain has an unusually deep hostname.");
        }
        (0.5, "Domain is not on any source list.")
    }
}

impl SourceScorer for StaticListScorer {
    fn lookup(&self, domain: &str) -> DomainQualityRecord {
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return DomainQualityRecord {
                domain,
                score: 0.5,
                status: status_for(0.5),
                reason: "No domain provided - default unknown status".to_string(),
                reference: RESEARCH_REFERENCE.to_string(),
            };
        }

        let (score, reason) = self.score(&domain);
        DomainQualityRecord {
            domain,
            score,
            status: status_for(score),
            reason: reason.to_string(),
            reference: RESEARCH_REFERENCE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstpass_common::DomainStatus;

    #[test]
    fn blacklisted_domain_scores_zero() {
        let scorer = StaticListScorer::default();
        let record = scorer.lookup("opindia.com");
        assert_eq!(record.score, 0.0);
        assert_eq!(record.status, DomainStatus::Blacklisted);
    }

    #[test]
    fn trusted_domain_matches_by_substring() {
        let scorer = StaticListScorer::default();
        let record = scorer.lookup("www.bbc.com");
        assert_eq!(record.score, 0.8);
        assert_eq!(record.status, DomainStatus::Trusted);
    }

    #[test]
    fn deep_hostname_is_penalized() {
        let scorer = StaticListScorer::default();
        let record = scorer.lookup("breaking.news.alerts.example.com");
        assert_eq!(record.score, 0.2);
        assert_eq!(record.status, DomainStatus::Blacklisted);
    }

    #[test]
    fn unlisted_domain_is_unknown() {
        let scorer = StaticListScorer::default();
        let record = scorer.lookup("quietlocalpaper.org");
        assert_eq!(record.score, 0.5);
        assert_eq!(record.status, DomainStatus::Unknown);
    }
}
