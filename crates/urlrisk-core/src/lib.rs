//! urlrisk core library
//!
//! Rule-based phishing-risk scoring for URLs. Everything here is pure and
//! synchronous; the web and CLI crates are thin shells around [`scan_url`].

pub mod error;
pub mod scanner;

pub use error::{UrlRiskError, UrlRiskResult};
pub use scanner::model::{ScanRequest, ScanResult, Verdict};
pub use scanner::rules::{default_rules, Rule, ScanTarget};
pub use scanner::{scan_url, Scanner};
