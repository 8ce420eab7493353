//! Combines the WHOIS, subdomain, URL-structure, and redirection analyses
//! into one clamped risk score. Each sub-analysis returns an additive raw
//! increment plus warnings in detection order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use firstpass_common::{extract_host, registrable_domain, subdomain_of, RiskAssessment, WhoisRecord};

use crate::lists::RiskLists;
use crate::redirect::{RedirectOutcome, RedirectProbe};
use crate::whois::WhoisClient;

/// Practical maximum accumulated raw risk across all checks; raw totals are
/// normalized against this before clamping to [0, 100].
const MAX_RAW_RISK: f64 = 45.0;

pub struct UrlRiskAnalyzer {
    lists: RiskLists,
    whois: Option<Arc<dyn WhoisClient>>,
    redirect: Arc<dyn RedirectProbe>,
}

impl UrlRiskAnalyzer {
    /// When `whois` is None (no API credential configured) the WHOIS
    /// sub-check is omitted entirely rather than scored as zero risk.
    pub fn new(
        lists: RiskLists,
        whois: Option<Arc<dyn WhoisClient>>,
        redirect: Arc<dyn RedirectProbe>,
    ) -> Self {
        Self { lists, whois, redirect }
    }

    pub async fn assess(&self, url: &str) -> RiskAssessment {
        let host = extract_host(url);
        let domain = registrable_domain(&host);

        // WHOIS fetch and redirect probe are independent network calls.
        let whois_fut = async {
            match &self.whois {
                Some(client) => Some(client.fetch(&domain).await),
                None => None,
            }
        };
        let (whois_result, redirect_outcome) = tokio::join!(whois_fut, self.redirect.resolve(url));

        let mut total: u32 = 0;
        let mut warnings: Vec<String> = Vec::new();

        match whois_result {
            Some(Ok(record)) => {
                let (score, mut warns) =
                    analyze_whois(&domain, &record, &self.lists, Utc::now());
                total += score;
                warnings.append(&mut warns);
            }
            Some(Err(e)) => {
                warn!(domain, error = %e, "WHOIS lookup failed");
                warnings.push("Could not retrieve WHOIS data".to_string());
            }
            None => {}
        }

        let (score, mut warns) = analyze_subdomain(&host, &self.lists);
        total += score;
        warnings.append(&mut warns);

        let (score, mut warns) = analyze_url_parts(url, &self.lists);
        total += score;
        warnings.append(&mut warns);

        match redirect_outcome {
            RedirectOutcome::SameDomain => {}
            RedirectOutcome::CrossDomain { final_url } => {
                total += 4;
                warnings.push(format!("Suspicious redirection detected (resolves to {final_url})"));
            }
            // Transport failure withholds the signal; it is never scored as
            // a redirection.
            RedirectOutcome::Unreachable { reason } => {
                warnings.push(format!("Redirect check failed: {reason}"));
            }
        }

        let risk_score = normalize_risk(total);
        info!(url, domain, raw = total, risk_score, "URL risk assessed");

        RiskAssessment { risk_score, warnings, domain }
    }
}

/// Normalize an accumulated raw risk into [0, 100].
pub fn normalize_risk(total: u32) -> u8 {
    let scaled = (f64::from(total) / MAX_RAW_RISK * 100.0).round();
    scaled.min(100.0) as u8
}

/// Registration-metadata rules. Each rule is independently additive;
/// first-match-wins applies only to the name-server and TLD scans.
pub fn analyze_whois(
    domain: &str,
    record: &WhoisRecord,
    lists: &RiskLists,
    now: DateTime<Utc>,
) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut warnings = Vec::new();

    match record.created {
        Some(created) => {
            if (now - created).num_days() < 180 {
                score += 3;
                warnings.push("Domain is newly registered (<6 months).".to_string());
            }
        }
        None => {
            score += 2;
            warnings.push("Creation date not available.".to_string());
        }
    }

    match record.expires {
        Some(expires) => {
            if (expires - now).num_days() < 365 {
                score += 3;
                warnings.push("Domain expires in <1 year.".to_string());
            }
        }
        None => {
            score += 2;
            warnings.push("Expiration date not available.".to_string());
        }
    }

    if let Some(status) = &record.domain_status {
        if status.to_lowercase().contains("hold") {
            score += 3;
            warnings.push("Domain status indicates hold/suspension.".to_string());
        }
    }

    match &record.registrant_email {
        Some(email) => {
            let email_domain = email.rsplit('@').next().unwrap_or("").to_lowercase();
            if lists.free_email_domains.contains(&email_domain) {
                score += 2;
                warnings.push("Registrant email is from free provider.".to_string());
            }
        }
        None => {
            score += 2;
            warnings.push("Registrant email missing.".to_string());
        }
    }

    if record.name_servers.is_empty() {
        score += 2;
        warnings.push("No name servers listed.".to_string());
    } else {
        for ns in &record.name_servers {
            let ns_lower = ns.to_lowercase();
            if lists
                .suspicious_dns_providers
                .iter()
                .any(|provider| ns_lower.contains(provider.as_str()))
            {
                score += 2;
                warnings.push(format!("Suspicious DNS provider: {ns}"));
                break;
            }
        }
    }

    let dnssec_signed = record
        .dnssec
        .as_deref()
        .is_some_and(|d| d.eq_ignore_ascii_case("signeddelegation"));
    if !dnssec_signed {
        score += 1;
        warnings.push("DNSSEC not properly enabled.".to_string());
    }

    for tld in &lists.suspicious_tlds {
        if domain.ends_with(tld.as_str()) {
            score += 3;
            warnings.push(format!("Suspicious domain extension: {tld}"));
            break;
        }
    }

    (score, warnings)
}

/// Subdomain heuristics: suspicious keywords (first match only), label
/// depth, and hyphen count.
pub fn analyze_subdomain(host: &str, lists: &RiskLists) -> (u32, Vec<String>) {
    let subdomain = subdomain_of(host);
    let mut score = 0;
    let mut warnings = Vec::new();

    if subdomain.is_empty() {
        return (score, warnings);
    }

    for keyword in &lists.suspicious_keywords {
        if subdomain.contains(keyword.as_str()) {
            score += 2;
            warnings.push(format!("Subdomain contains suspicious keyword '{keyword}'."));
            break;
        }
    }

    if subdomain.split('.').count() > 2 {
        score += 2;
        warnings.push("Subdomain is overly complex.".to_string());
    }

    if subdomain.matches('-').count() > 2 {
        score += 1;
        warnings.push("Subdomain contains many hyphens.".to_string());
    }

    (score, warnings)
}

/// URL-structure heuristics: scheme, port, path/query keywords (every match
/// counts), and query length.
pub fn analyze_url_parts(url: &str, lists: &RiskLists) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut warnings = Vec::new();

    let Ok(parsed) = url::Url::parse(url) else {
        return (score, warnings);
    };

    if parsed.scheme() != "https" {
        score += 1;
        warnings.push("URL not using HTTPS".to_string());
    }

    // `Url::port()` is None when the port is the scheme default, so any
    // explicit port here is non-standard.
    if let Some(port) = parsed.port() {
        score += 1;
        warnings.push(format!("Non-standard port: {port}"));
    }

    let path = parsed.path().to_lowercase();
    let query = parsed.query().unwrap_or("").to_lowercase();

    for keyword in &lists.suspicious_keywords {
        if path.contains(keyword.as_str()) {
            score += 1;
            warnings.push(format!("Path contains '{keyword}'"));
        }
        if query.contains(keyword.as_str()) {
            score += 1;
            warnings.push(format!("Query contains '{keyword}'"));
        }
    }

    if query.len() > 100 {
        score += 1;
        warnings.push("Long query string".to_string());
    }

    (score, warnings)
}
