//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use urlrisk_core::{Rule, ScanResult, Verdict};

/// Print a scan result.
pub fn print_scan_result(result: &ScanResult) {
    println!("{}", result.url.cyan().bold());
    println!();
    println!("{}: {}", "Score".bold(), result.score);
    println!("{}: {}", "Verdict".bold(), verdict_colored(result.verdict));

    if !result.reasons.is_empty() {
        println!();
        println!("{}", "Reasons".bold());
        for reason in &result.reasons {
            println!("  - {}", reason);
        }
    }
}

/// Print the rule table.
pub fn print_rules_table(rules: &[Rule]) {
    println!("{:<22} {:>6}  {}", "Rule", "Points", "Reason");
    println!("{}", "─".repeat(60));

    for rule in rules {
        println!(
            "{:<22} {:>6}  {}",
            rule.name,
            format!("+{}", rule.points).yellow(),
            rule.reason
        );
    }
}

fn verdict_colored(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::LikelyPhishing => verdict.label().red().bold(),
        Verdict::Suspicious => verdict.label().yellow().bold(),
        Verdict::Caution => verdict.label().yellow(),
        Verdict::NoMajorFlags => verdict.label().green(),
    }
}
