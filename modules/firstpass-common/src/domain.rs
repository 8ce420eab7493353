//! Domain extraction and normalization. Every lookup and comparison in the
//! pipeline goes through these helpers so domains are always lowercase with
//! the leading `www.` stripped.

/// Extract the host from a URL (e.g., "https://www.example.com/path" -> "www.example.com").
pub fn extract_host(url: &str) -> String {
    url.split("://")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or("")
        .split('@')
        .next_back()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Normalize a domain for lookups: lowercase + strip leading `www.`.
pub fn normalize_domain(domain: &str) -> String {
    let d = domain.trim().to_lowercase();
    d.strip_prefix("www.").unwrap_or(&d).to_string()
}

/// Normalized domain of a URL.
pub fn url_domain(url: &str) -> String {
    normalize_domain(&extract_host(url))
}

/// The registrable part of a host: the last two dot-separated labels.
/// Multi-part public suffixes (e.g. `.co.uk`) collapse to the suffix pair,
/// which is good enough for same-site redirect comparison.
pub fn registrable_domain(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        return host;
    }
    labels[labels.len() - 2..].join(".")
}

/// The subdomain labels of a host, i.e. everything before the registrable
/// domain. Empty when the host is a bare registrable domain.
pub fn subdomain_of(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        return String::new();
    }
    labels[..labels.len() - 2].join(".")
}
