// crates/core/src/runner.rs

//! Sequential smoke runner.
//!
//! Each case is one POST round trip with two terminal outcomes. Failures are
//! printed and never stop the run; only a failed write to `out` is returned
//! as an error.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::action_client::ActionClient;
use crate::types::{ActionResponse, CaseOutcome, SmokeCase};

const SEPARATOR_WIDTH: usize = 50;

/// Run one case and print its section of the report.
pub fn run_case<C, W>(client: &C, case: &SmokeCase, out: &mut W) -> Result<CaseOutcome>
where
    C: ActionClient + ?Sized,
    W: Write,
{
    writeln!(out, "Testing {}...", case.action)?;

    let url = match client.endpoint(&case.action) {
        Ok(url) => url,
        Err(e) => return report(out, Err(e)),
    };
    writeln!(out, "URL: {}", url)?;
    writeln!(out, "Data: {}", pretty(&case.payload)?)?;
    out.flush()?;

    report(out, client.post_json(&url, &case.payload))
}

/// Run all cases in order. `observer` sees each outcome after it is printed.
pub fn run_all<C, W, F>(
    client: &C,
    cases: &[SmokeCase],
    out: &mut W,
    mut observer: F,
) -> Result<Vec<CaseOutcome>>
where
    C: ActionClient + ?Sized,
    W: Write,
    F: FnMut(&SmokeCase, &CaseOutcome),
{
    let mut outcomes = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
            writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        }
        let outcome = run_case(client, case, out)?;
        observer(case, &outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn report<W: Write>(out: &mut W, result: Result<ActionResponse>) -> Result<CaseOutcome> {
    let outcome = match result {
        Ok(resp) => {
            writeln!(out)?;
            writeln!(out, "Status Code: {}", resp.status)?;
            writeln!(out, "Response: {}", pretty(&resp.body)?)?;
            CaseOutcome::Passed(resp)
        }
        Err(e) => {
            let message = format!("{:#}", e);
            writeln!(out, "Error: {}", message)?;
            CaseOutcome::Failed(message)
        }
    };
    out.flush()?;
    Ok(outcome)
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to format JSON")
}
