//! URL risk scanning.

pub mod model;
pub mod rules;

use crate::error::{UrlRiskError, UrlRiskResult};
use model::{ScanResult, Verdict};
use rules::{default_rules, Rule, ScanTarget};
use tracing::debug;
use url::Url;

/// Scores URLs against an ordered rule list.
#[derive(Debug, Clone)]
pub struct Scanner {
    rules: Vec<Rule>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl Scanner {
    /// Build a scanner over a custom rule list. Rules run in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Score a URL.
    ///
    /// Every rule is evaluated; each one that matches adds its points and
    /// appends its reason. An empty input is `MissingInput`, anything that
    /// is not an absolute URL is `InvalidUrl`.
    pub fn scan(&self, raw: &str) -> UrlRiskResult<ScanResult> {
        if raw.is_empty() {
            return Err(UrlRiskError::MissingInput);
        }

        let url = Url::parse(raw)?;
        let target = ScanTarget::new(raw, &url);

        let mut score = 0;
        let mut reasons = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.matches(&target)) {
            score += rule.points;
            reasons.push(rule.reason.to_string());
        }

        let verdict = Verdict::from_score(score);
        debug!(url = raw, score, %verdict, "Scanned URL");

        Ok(ScanResult {
            url: raw.to_string(),
            score,
            reasons,
            verdict,
        })
    }
}

/// Score a URL with the built-in rules.
pub fn scan_url(raw: &str) -> UrlRiskResult<ScanResult> {
    Scanner::default().scan(raw)
}
