mod log;

use std::io;

use anyhow::Result;

use api_smoke_core::action_client::HttpActionClient;
use api_smoke_core::runner::run_all;
use api_smoke_core::types::SmokeConfig;

fn main() -> Result<()> {
    let config = SmokeConfig::default();
    let client = HttpActionClient::new(&config)?;
    let cases = config.cases()?;

    log::run_start(client.base_url(), cases.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Failed cases are printed in place; the exit status stays 0.
    run_all(&client, &cases, &mut out, log::case_outcome)?;

    Ok(())
}
