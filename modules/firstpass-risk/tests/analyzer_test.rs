//! Integration tests for the URL risk analyzer with injected WHOIS and
//! redirect collaborators — no network involved.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

use firstpass_common::WhoisRecord;
use firstpass_risk::{
    RedirectOutcome, RedirectProbe, RiskLists, UrlRiskAnalyzer, WhoisClient,
};

// ---------------------------------------------------------------------------
// Test collaborators
// ---------------------------------------------------------------------------

struct FixedWhois(WhoisRecord);

#[async_trait]
impl WhoisClient for FixedWhois {
    async fn fetch(&self, _domain: &str) -> Result<WhoisRecord> {
        Ok(self.0.clone())
    }
}

struct FailingWhois;

#[async_trait]
impl WhoisClient for FailingWhois {
    async fn fetch(&self, _domain: &str) -> Result<WhoisRecord> {
        anyhow::bail!("connection timed out")
    }
}

struct FixedRedirect(RedirectOutcome);

#[async_trait]
impl RedirectProbe for FixedRedirect {
    async fn resolve(&self, _url: &str) -> RedirectOutcome {
        self.0.clone()
    }
}

fn clean_whois() -> WhoisRecord {
    let now = Utc::now();
    WhoisRecord {
        created: Some(now - Duration::days(4000)),
        expires: Some(now + Duration::days(4000)),
        name_servers: vec!["ns1.example.com".into()],
        registrant_email: Some("owner@example-corp.com".into()),
        dnssec: Some("signeddelegation".into()),
        ..WhoisRecord::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cross_domain_redirect_adds_four_raw_points() {
    let baseline = UrlRiskAnalyzer::new(
        RiskLists::default(),
        Some(Arc::new(FixedWhois(clean_whois()))),
        Arc::new(FixedRedirect(RedirectOutcome::SameDomain)),
    );
    let redirected = UrlRiskAnalyzer::new(
        RiskLists::default(),
        Some(Arc::new(FixedWhois(clean_whois()))),
        Arc::new(FixedRedirect(RedirectOutcome::CrossDomain {
            final_url: "https://evil.net/landing".into(),
        })),
    );

    let base = baseline.assess("https://example.com/story").await;
    let hit = redirected.assess("https://example.com/story").await;

    assert_eq!(base.risk_score, 0);
    // +4 raw over a clean baseline: round(4/45*100) = 9
    assert_eq!(hit.risk_score, 9);
    assert!(hit.warnings.iter().any(|w| w.contains("Suspicious redirection")));
    assert!(hit.warnings.iter().any(|w| w.contains("evil.net")));
}

#[tokio::test]
async fn unreachable_probe_warns_without_scoring() {
    let analyzer = UrlRiskAnalyzer::new(
        RiskLists::default(),
        Some(Arc::new(FixedWhois(clean_whois()))),
        Arc::new(FixedRedirect(RedirectOutcome::Unreachable {
            reason: "dns error".into(),
        })),
    );

    let assessment = analyzer.assess("https://example.com/story").await;
    assert_eq!(assessment.risk_score, 0);
    assert!(assessment.warnings.iter().any(|w| w.contains("Redirect check failed")));
    assert!(!assessment.warnings.iter().any(|w| w.contains("Suspicious redirection")));
}

#[tokio::test]
async fn whois_failure_degrades_to_warning() {
    let analyzer = UrlRiskAnalyzer::new(
        RiskLists::default(),
        Some(Arc::new(FailingWhois)),
        Arc::new(FixedRedirect(RedirectOutcome::SameDomain)),
    );

    let assessment = analyzer.assess("https://example.com/story").await;
    assert_eq!(assessment.risk_score, 0);
    assert!(assessment
        .warnings
        .iter()
        .any(|w| w.contains("Could not retrieve WHOIS data")));
}

#[tokio::test]
async fn whois_check_is_omitted_without_credentials() {
    let analyzer = UrlRiskAnalyzer::new(
        RiskLists::default(),
        None,
        Arc::new(FixedRedirect(RedirectOutcome::SameDomain)),
    );

    let assessment = analyzer.assess("https://example.com/story").await;
    assert_eq!(assessment.risk_score, 0);
    assert!(assessment.warnings.is_empty());
}

#[tokio::test]
async fn risk_score_clamps_to_100_when_raw_risk_exceeds_calibration() {
    // Everything wrong at once: empty WHOIS record, phishing-shaped URL on a
    // suspicious TLD, cross-domain redirect.
    let analyzer = UrlRiskAnalyzer::new(
        RiskLists::default(),
        Some(Arc::new(FixedWhois(WhoisRecord::default()))),
        Arc::new(FixedRedirect(RedirectOutcome::CrossDomain {
            final_url: "https://elsewhere.org/".into(),
        })),
    );

    let url = "http://login-secure-verify-update.a.b.bank-alerts.xyz:8080\
/login/verify/secure/update/account/payment/billing/confirm\
?password=1&token=2&signin=3&claim=4&prize=5&bonus=6&gift=7&reward=8&urgent=9&free=10&access=11\
&invoice=12&wallet=13&webmail=14&microsoft=15";
    let assessment = analyzer.assess(url).await;
    assert_eq!(assessment.risk_score, 100);
}

#[tokio::test]
async fn assessment_reports_the_registrable_domain() {
    let analyzer = UrlRiskAnalyzer::new(
        RiskLists::default(),
        None,
        Arc::new(FixedRedirect(RedirectOutcome::SameDomain)),
    );

    let assessment = analyzer.assess("https://news.example.com/a").await;
    assert_eq!(assessment.domain, "example.com");
}
