//! Process boundary shared by the check binaries.

use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::rpc::RpcClient;
use crate::Error;

/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the RPC client described by `config`. Makes no network calls.
pub fn connect(config: &Config) -> Result<RpcClient, Error> {
    let signer = config.signer_address()?;
    let client = RpcClient::new(&config.rpc_url, config.rpc_timeout())?.with_signer(signer);
    info!(rpc = %client.url(), explicit_signer = signer.is_some(), "Configuration loaded");
    Ok(client)
}

/// Print a report, or report the failure, and pick the exit status.
pub fn finish<R: Display>(result: Result<R, Error>) -> ExitCode {
    let code = report(result, &mut std::io::stdout(), &mut std::io::stderr());
    ExitCode::from(code)
}

/// Write the report to `out`, or the failure to `err`, and return the exit status.
///
/// Failures reach `err` regardless of the `RUST_LOG` filter.
pub fn report<R: Display>(
    result: Result<R, Error>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match result {
        Ok(report) => {
            let _ = write!(out, "{report}").and_then(|()| out.flush());
            0
        }
        Err(e) => {
            if e.is_config() {
                error!(error = %e, "FATAL: configuration error");
            } else {
                error!(error = %e, "FATAL: chain query failed");
            }
            let _ = writeln!(err, "Error: {e}");
            e.exit_code()
        }
    }
}
