//! Reference lists consulted by the risk analyzer. The compiled-in defaults
//! mirror the curated phishing-indicator datasets; a JSON file can replace
//! any of them without a rebuild. Keyword and TLD lists are ordered so that
//! first-match-wins checks are deterministic.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use firstpass_common::FirstPassError;

const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".icu", ".pw", ".buzz",
    ".site", ".online", ".work", ".click", ".info", ".loan", ".shop", ".best",
    ".rest", ".fun", ".party", ".review", ".stream", ".host", ".website",
    ".press", ".download", ".cam", ".date", ".trade", ".vip", ".life", ".win",
    ".biz", ".pro", ".club", ".ooo", ".world",
];

const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "aol.com",
    "protonmail.com", "gmx.com", "yandex.com", "mail.com", "zoho.com",
    "tutanota.com", "icloud.com", "rediffmail.com", "inbox.lv", "hushmail.com",
    "mail.ru", "rambler.ru", "qq.com", "yopmail.com", "temp-mail.org",
    "guerrillamail.com", "10minutemail.com", "mailinator.com", "sharklasers.com",
    "throwawaymail.com",
];

const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "secure", "update", "verify", "bank", "account", "signin", "payment",
    "invoice", "ebay", "paypal", "dropbox", "webscr", "admin", "support", "service",
    "billing", "confirm", "security", "limited", "alert", "important", "authenticate",
    "password", "token", "unlock", "recover", "upgrade", "verifyidentity", "access",
    "checkout", "bonus", "free", "prize", "claim", "gift", "reward", "survey",
    "urgent", "suspend", "apple", "amazon", "wallet", "cryptowallet", "bitcoins",
    "coinbase", "exchange", "webmail", "office365", "windows", "microsoft", "android",
];

const SUSPICIOUS_DNS_PROVIDERS: &[&str] = &[
    "freenom", "000webhost", "infinitefree", "awardspace", "biz.nf", "byet.org",
    "heliohost", "epizy.com", "profreehost", "freehostia.com", "webhostapp.com",
    "hostinger", "weeblydns.net", "godaddysites.com", "googledomains.com",
    "cloudns.net", "runhosting.com", "inmotionhosting.com", "host-ed.net",
    "bravenet.com", "freehosting.com", "freehostingnoads.net", "my3gb.com",
    "server155.com", "000a.biz", "ns1.afraid.org", "ns2.afraid.org", "hostslb.com",
    "suspended-domain.com", "dnsowl.com", "porkbun.com", "dynadot.com", "buddyns.com",
    "changeip.com", "no-ip.com", "duckdns.org", "dynu.com", "ddns.net", "dyndns.org",
    "tzo.com", "xh0st.com", "ns1.parklogic.com", "ns2.parklogic.com",
    "ns1.abovedomains.com", "ns2.abovedomains.com", "parked.com", "ns1.voodoo.com",
    "ns2.voodoo.com", "ns1.bodis.com", "ns2.bodis.com", "hostwindsdns.com",
    "ns1.namecheaphosting.com", "ns2.namecheaphosting.com", "ns1.hostmonster.com",
    "ns2.hostmonster.com", "ns1.justhost.com", "ns2.justhost.com", "ns1.bluehost.com",
    "ns2.bluehost.com", "ns1.siteground.net", "ns2.siteground.net", "ns1.dreamhost.com",
    "ns2.dreamhost.com", "ns3.dreamhost.com",
];

#[derive(Debug, Default, Deserialize)]
struct RiskListsFile {
    #[serde(default)]
    suspicious_tlds: Option<Vec<String>>,
    #[serde(default)]
    free_email_domains: Option<Vec<String>>,
    #[serde(default)]
    suspicious_keywords: Option<Vec<String>>,
    #[serde(default)]
    suspicious_dns_providers: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct RiskLists {
    pub suspicious_tlds: Vec<String>,
    pub free_email_domains: HashSet<String>,
    pub suspicious_keywords: Vec<String>,
    pub suspicious_dns_providers: Vec<String>,
}

impl Default for RiskLists {
    fn default() -> Self {
        Self {
            suspicious_tlds: to_strings(SUSPICIOUS_TLDS),
            free_email_domains: FREE_EMAIL_DOMAINS.iter().map(|s| s.to_string()).collect(),
            suspicious_keywords: to_strings(SUSPICIOUS_KEYWORDS),
            suspicious_dns_providers: to_strings(SUSPICIOUS_DNS_PROVIDERS),
        }
    }
}

impl RiskLists {
    /// Load overrides from a JSON file. Lists absent from the file keep
    /// their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FirstPassError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FirstPassError::Dataset(format!("cannot read {}: {e}", path.display()))
        })?;
        let file: RiskListsFile = serde_json::from_str(&raw).map_err(|e| {
            FirstPassError::Dataset(format!("{}: invalid risk lists: {e}", path.display()))
        })?;

        let defaults = Self::default();
        let lists = Self {
            suspicious_tlds: file.suspicious_tlds.unwrap_or(defaults.suspicious_tlds),
            free_email_domains: file
                .free_email_domains
                .map(|v| v.into_iter().collect())
                .unwrap_or(defaults.free_email_domains),
            suspicious_keywords: file.suspicious_keywords.unwrap_or(defaults.suspicious_keywords),
            suspicious_dns_providers: file
                .suspicious_dns_providers
                .unwrap_or(defaults.suspicious_dns_providers),
        };
        info!(path = %path.display(), "Loaded risk list overrides");
        Ok(lists)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
