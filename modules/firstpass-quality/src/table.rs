//! Expert-rated domain quality table, loaded once at startup from a CSV
//! reference file of `domain,pc1` pairs. Lookups are pure functions over the
//! immutable map.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use firstpass_common::{clamp01, normalize_domain, DomainQualityRecord, DomainStatus, FirstPassError};

use crate::{status_for, SourceScorer, RESEARCH_REFERENCE};

#[derive(Debug)]
pub struct DomainQualityTable {
    scores: HashMap<String, f64>,
}

impl DomainQualityTable {
    /// Load the reference dataset. A missing or malformed file is fatal —
    /// the process cannot start without it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FirstPassError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FirstPassError::Dataset(format!("cannot read {}: {e}", path.display()))
        })?;

        let mut lines = raw.lines().enumerate();
        let (_, header) = lines.next().ok_or_else(|| {
            FirstPassError::Dataset(format!("{} is empty", path.display()))
        })?;

        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let domain_col = columns.iter().position(|c| *c == "domain").ok_or_else(|| {
            FirstPassError::Dataset(format!("{}: missing 'domain' column", path.display()))
        })?;
        let score_col = columns.iter().position(|c| *c == "pc1").ok_or_else(|| {
            FirstPassError::Dataset(format!("{}: missing 'pc1' column", path.display()))
        })?;

        let mut scores = HashMap::new();
        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let domain = fields.get(domain_col).ok_or_else(|| {
                FirstPassError::Dataset(format!("{} line {}: too few fields", path.display(), line_no + 1))
            })?;
            let score: f64 = fields
                .get(score_col)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| {
                    FirstPassError::Dataset(format!(
                        "{} line {}: invalid score",
                        path.display(),
                        line_no + 1
                    ))
                })?;
            scores.insert(normalize_domain(domain), clamp01(score));
        }

        info!(path = %path.display(), rows = scores.len(), "Loaded domain quality dataset");
        Ok(Self { scores })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl SourceScorer for DomainQualityTable {
    fn lookup(&self, domain: &str) -> DomainQualityRecord {
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return DomainQualityRecord {
                domain,
                score: 0.5,
                status: DomainStatus::Unknown,
                reason: "No domain provided - default unknown status".to_string(),
                reference: RESEARCH_REFERENCE.to_string(),
            };
        }

        let Some(&score) = self.scores.get(&domain) else {
            return DomainQualityRecord {
                domain,
                score: 0.5,
                status: DomainStatus::Unknown,
                reason: "Domain not found in expert-rated dataset.".to_string(),
                reference: RESEARCH_REFERENCE.to_string(),
            };
        };

        let status = status_for(score);
        let reason = match status {
            DomainStatus::Trusted => {
                "Aggregated expert ratings indicate this is a highly trusted news source."
            }
            DomainStatus::Blacklisted => {
                "Aggregated expert ratings indicate this is a low-quality or potentially misleading source."
            }
            DomainStatus::Unknown => "Domain is rated as intermediate quality.",
        };

        DomainQualityRecord {
            domain,
            score,
            status,
            reason: reason.to_string(),
            reference: RESEARCH_REFERENCE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table_from(csv: &str) -> DomainQualityTable {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(csv.as_bytes()).expect("write csv");
        DomainQualityTable::load(file.path()).expect("load table")
    }

    #[test]
    fn load_fails_on_missing_file() {
        let err = DomainQualityTable::load("/nonexistent/domain_pc1.csv").unwrap_err();
        assert!(matches!(err, FirstPassError::Dataset(_)));
    }

    #[test]
    fn load_fails_on_malformed_score() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"domain,pc1\nexample.com,not-a-number\n").expect("write csv");
        let err = DomainQualityTable::load(file.path()).unwrap_err();
        assert!(matches!(err, FirstPassError::Dataset(_)));
    }

    #[test]
    fn load_fails_on_missing_columns() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"host,rating\nexample.com,0.5\n").expect("write csv");
        assert!(DomainQualityTable::load(file.path()).is_err());
    }

    #[test]
    fn trusted_source_scenario() {
        let table = table_from("domain,pc1\nbbc.com,0.9\n");
        let record = table.lookup("bbc.com");
        assert_eq!(record.status, DomainStatus::Trusted);
        assert_eq!(record.score, 0.9);
        assert_eq!(record.reference, RESEARCH_REFERENCE);
    }

    #[test]
    fn status_boundaries_from_table() {
        let table = table_from(
            "domain,pc1\nhigh.com,0.8\nalmost.com,0.79\nlow.com,0.2\njust-above.com,0.21\n",
        );
        assert_eq!(table.lookup("high.com").status, DomainStatus::Trusted);
        assert_eq!(table.lookup("almost.com").status, DomainStatus::Unknown);
        assert_eq!(table.lookup("low.com").status, DomainStatus::Blacklisted);
        assert_eq!(table.lookup("just-above.com").status, DomainStatus::Unknown);
    }

    #[test]
    fn blank_and_missing_domains_default_to_unknown() {
        let table = table_from("domain,pc1\nbbc.com,0.9\n");
        let blank = table.lookup("   ");
        assert_eq!(blank.score, 0.5);
        assert_eq!(blank.status, DomainStatus::Unknown);
        assert!(blank.reason.contains("No domain provided"));

        let missing = table.lookup("unheard-of.org");
        assert_eq!(missing.score, 0.5);
        assert_eq!(missing.status, DomainStatus::Unknown);
        assert!(missing.reason.contains("not found"));
    }

    #[test]
    fn lookup_is_idempotent() {
        let table = table_from("domain,pc1\nbbc.com,0.9\n");
        let first = table.lookup("bbc.com");
        let second = table.lookup("bbc.com");
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_normalizes_domain() {
        let table = table_from("domain,pc1\nbbc.com,0.9\n");
        assert_eq!(table.lookup("WWW.BBC.com").score, 0.9);
    }
}
