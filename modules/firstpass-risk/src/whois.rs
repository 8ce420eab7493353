//! WHOIS lookup client. The hosted WhoisXML JSON API is the production
//! implementation; the trait seam lets tests inject canned records. A failed
//! lookup degrades to a warning on the assessment, never an error to the
//! caller.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::info;

use firstpass_common::WhoisRecord;

const WHOISXML_ENDPOINT: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";

#[async_trait]
pub trait WhoisClient: Send + Sync {
    async fn fetch(&self, domain: &str) -> Result<WhoisRecord>;
}

// --- WhoisXML API client ---

#[derive(Debug, Deserialize)]
struct WhoisResponse {
    #[serde(rename = "WhoisRecord")]
    record: Option<RawWhoisRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWhoisRecord {
    created_date: Option<String>,
    expires_date: Option<String>,
    updated_date: Option<String>,
    registrar_name: Option<String>,
    #[serde(default)]
    name_servers: Option<RawNameServers>,
    #[serde(default)]
    registrant: Option<RawContact>,
    dnssec: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNameServers {
    #[serde(default)]
    host_names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContact {
    email: Option<String>,
}

pub struct WhoisXmlClient {
    api_key: String,
    client: reqwest::Client,
}

impl WhoisXmlClient {
    pub fn new(api_key: &str, timeout: Duration) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl WhoisClient for WhoisXmlClient {
    async fn fetch(&self, domain: &str) -> Result<WhoisRecord> {
        info!(domain, "WHOIS lookup");

        let resp = self
            .client
            .get(WHOISXML_ENDPOINT)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("domainName", domain),
                ("outputFormat", "JSON"),
            ])
            .send()
            .await
            .context("WHOIS API request failed")?
            .error_for_status()
            .context("WHOIS API returned an error status")?;

        let data: WhoisResponse = resp.json().await.context("Failed to parse WHOIS response")?;
        let raw = data
            .record
            .ok_or_else(|| anyhow::anyhow!("WHOIS response has no record for {domain}"))?;

        Ok(WhoisRecord {
            created: raw.created_date.as_deref().and_then(parse_whois_date),
            expires: raw.expires_date.as_deref().and_then(parse_whois_date),
            updated: raw.updated_date.as_deref().and_then(parse_whois_date),
            registrar: raw.registrar_name,
            name_servers: raw.name_servers.map(|ns| ns.host_names).unwrap_or_default(),
            registrant_email: raw.registrant.and_then(|r| r.email),
            dnssec: raw.dnssec,
            domain_status: raw.status,
        })
    }
}

/// Parse the date formats the WHOIS API emits. An unparseable date is
/// treated as absent so the missing-date rules apply.
pub fn parse_whois_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // e.g. "1997-09-15T07:00:00+0000"
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_offset_dates() {
        assert!(parse_whois_date("1997-09-15T04:00:00Z").is_some());
        assert!(parse_whois_date("1997-09-15T07:00:00+0000").is_some());
        assert!(parse_whois_date("not a date").is_none());
    }

    #[test]
    fn deserializes_whoisxml_payload() {
        let payload = serde_json::json!({
            "WhoisRecord": {
                "createdDate": "2024-01-01T00:00:00Z",
                "expiresDate": "2026-01-01T00:00:00Z",
                "registrarName": "Example Registrar",
                "nameServers": {"hostNames": ["ns1.example.com"]},
                "registrant": {"email": "owner@example.com"},
                "dnssec": "signedDelegation",
                "status": "clientTransferProhibited"
            }
        });
        let parsed: WhoisResponse = serde_json::from_value(payload).expect("deserialize");
        let raw = parsed.record.expect("record present");
        assert_eq!(raw.registrar_name.as_deref(), Some("Example Registrar"));
        assert_eq!(raw.name_servers.unwrap().host_names, vec!["ns1.example.com"]);
        assert_eq!(raw.registrant.unwrap().email.as_deref(), Some("owner@example.com"));
    }
}
