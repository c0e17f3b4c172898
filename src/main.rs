//! Envcheck CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use envcheck::cli::{CheckCommand, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Envcheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }
    let use_color = !cli.no_color && console::colors_enabled();

    let dir = std::env::current_dir().unwrap_or_default();

    let mut stdout = std::io::stdout();
    match CheckCommand::new(&dir, use_color).execute(&mut stdout) {
        Ok(result) => {
            let _ = stdout.flush();
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
