//! URL phishing-risk analysis: WHOIS registration checks, subdomain and
//! URL-structure heuristics, and a redirect probe, combined into a single
//! clamped risk score with an ordered warning trail.

pub mod analyzer;
pub mod lists;
pub mod redirect;
pub mod whois;

pub use analyzer::UrlRiskAnalyzer;
pub use lists::RiskLists;
pub use redirect::{HttpRedirectProbe, RedirectOutcome, RedirectProbe};
pub use whois::{WhoisClient, WhoisXmlClient};
