//! Heuristic rule table.
//!
//! Each rule is a pure predicate over a [`ScanTarget`] paired with the points
//! it adds and the reason it reports. Rules never see each other's results.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Four dot-separated groups of 1-3 ASCII digits. Octet ranges are not checked.
static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").unwrap());

/// Words that commonly show up in credential-harvesting links.
pub const SUSPICIOUS_KEYWORDS: [&str; 5] = ["login", "verify", "account", "secure", "update"];

/// Hostnames with more labels than this are flagged.
const MAX_HOST_LABELS: usize = 3;

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ScanTarget<'a> {
    /// Input exactly as the caller supplied it.
    pub raw: &'a str,
    pub url: &'a Url,
    /// Host as text, or empty for URLs without one (`mailto:`, `data:`).
    pub host: &'a str,
}

impl<'a> ScanTarget<'a> {
    pub fn new(raw: &'a str, url: &'a Url) -> Self {
        Self {
            raw,
            url,
            host: url.host_str().unwrap_or(""),
        }
    }
}

/// A single scoring rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub points: u32,
    pub reason: &'static str,
    pub predicate: fn(&ScanTarget<'_>) -> bool,
}

impl Rule {
    pub fn matches(&self, target: &ScanTarget<'_>) -> bool {
        (self.predicate)(target)
    }
}

/// The built-in rules, in evaluation order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "non-https",
            points: 20,
            reason: "Not using HTTPS",
            predicate: is_not_https,
        },
        Rule {
            name: "ip-host",
            points: 30,
            reason: "Domain is an IP address",
            predicate: is_ip_literal_host,
        },
        Rule {
            name: "excess-subdomains",
            points: 10,
            reason: "Too many subdomains",
            predicate: has_excess_subdomains,
        },
        Rule {
            name: "suspicious-keywords",
            points: 20,
            reason: "Contains suspicious keywords",
            predicate: has_suspicious_keyword,
        },
    ]
}

fn is_not_https(target: &ScanTarget<'_>) -> bool {
    target.url.scheme() != "https"
}

fn is_ip_literal_host(target: &ScanTarget<'_>) -> bool {
    DOTTED_QUAD.is_match(target.host)
}

fn has_excess_subdomains(target: &ScanTarget<'_>) -> bool {
    target.host.split('.').count() > MAX_HOST_LABELS
}

// Matches anywhere in the raw input, path and query included.
fn has_suspicious_keyword(target: &ScanTarget<'_>) -> bool {
    let lowered = target.raw.to_lowercase();
    SUSPICIOUS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
