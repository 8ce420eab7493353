//! Source-trust scoring. Two interchangeable strategies sit behind the
//! [`SourceScorer`] trait: the expert-rated quality dataset and the static
//! trusted/blacklisted lists. Which one runs is a configuration choice.

pub mod static_list;
pub mod table;

pub use static_list::StaticListScorer;
pub use table::DomainQualityTable;

use firstpass_common::{DomainQualityRecord, DomainStatus};

/// Citation attached to every source-trust record for provenance.
pub const RESEARCH_REFERENCE: &str = "Lin, H.; Lasser, J.; Lewandowsky, S.; Cole, R.; Gully, A.; Rand, D.G.; Pennycook, G. \
(2023). High level of correspondence across different news domain quality rating sets. \
PNAS Nexus, 2(9), pgad286.";

/// A strategy for scoring the trustworthiness of a news domain.
/// Implementations are pure lookups over immutable data and safe for
/// unlimited concurrent use.
pub trait SourceScorer: Send + Sync {
    fn lookup(&self, domain: &str) -> DomainQualityRecord;
}

/// Status band for a quality score: trusted at or above 0.8, blacklisted at
/// or below 0.2, unknown in between.
pub fn status_for(score: f64) -> DomainStatus {
    if score >= 0.8 {
        DomainStatus::Trusted
    } else if score <= 0.2 {
        DomainStatus::Blacklisted
    } else {
        DomainStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bands_at_boundaries() {
        assert_eq!(status_for(0.8), DomainStatus::Trusted);
        assert_eq!(status_for(0.79), DomainStatus::Unknown);
        assert_eq!(status_for(0.2), DomainStatus::Blacklisted);
        assert_eq!(status_for(0.21), DomainStatus::Unknown);
        assert_eq!(status_for(1.0), DomainStatus::Trusted);
        assert_eq!(status_for(0.0), DomainStatus::Blacklisted);
    }
}
