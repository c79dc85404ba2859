// crates/host/src/log.rs

//! Colored progress logging on stderr. The report itself goes to stdout.

use api_smoke_core::envelope::EnvelopeSummary;
use api_smoke_core::types::{CaseOutcome, SmokeCase};

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Log the start of a run.
pub fn run_start(base_url: &str, cases: usize) {
    eprintln!(
        "{DIM}[info]{RESET} {CYAN}→ {}{RESET} {DIM}({} cases){RESET}",
        base_url, cases
    );
}

/// Log a finished case.
pub fn case_outcome(case: &SmokeCase, outcome: &CaseOutcome) {
    match outcome {
        CaseOutcome::Passed(resp) => {
            let color = if (200..300).contains(&resp.status) {
                GREEN
            } else {
                YELLOW
            };
            eprintln!(
                "{BOLD}[{}]{RESET} {color}✓ HTTP {}{RESET} {DIM}{}{RESET}",
                case.action,
                resp.status,
                EnvelopeSummary::from_value(&resp.body)
            );
        }
        CaseOutcome::Failed(message) => {
            eprintln!(
                "{BOLD}[{}]{RESET} {RED}✗ Error:{RESET} {}",
                case.action,
                truncate(message, 150)
            );
        }
    }
}

/// Truncate and clean string for display.
fn truncate(s: &str, max: usize) -> String {
    let clean: String = s
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect();
    let trimmed = clean.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
