//! Tracing setup for the stdio server
//!
//! Logs go to stderr because stdout carries the MCP protocol. `RUST_LOG`
//! directives are honoured on top of the default level, and
//! `LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level for this crate given the number of `-v` flags
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Filter directive for this crate at the `-v` level
pub fn crate_directive(verbose: u8) -> String {
    format!("jadx_mcp={}", level_for(verbose))
}

/// Initialize tracing for the `jadx_mcp` crate
///
/// The filter starts from `RUST_LOG` (e.g. `RUST_LOG=reqwest=debug`) and then
/// gets a `jadx_mcp=<level>` directive derived from the `-v` count, so the
/// crate's own level always follows the command line. Other targets keep
/// whatever `RUST_LOG` says, defaulting to `error`.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(crate_directive(verbose).parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}
