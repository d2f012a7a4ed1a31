//! # Pagewright
//!
//! Command-line page builder.

use std::io;

use clap::Parser;
use pagewright_cli::{CliArgs, CliConfig, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing on stderr so exports on stdout stay clean.
///
/// Set `RUST_LOG` to control log levels (default: info,pagewright_core=debug,pagewright_codegen=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,pagewright_core=debug,pagewright_codegen=debug")
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let command = args.command.clone();
    let config = CliConfig::from(args);

    let mut session = Session::open(config)?;
    let stdout = io::stdout();
    session.run(command, &mut stdout.lock())?;
    Ok(())
}
