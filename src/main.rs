use clap::Parser;
use scout_cves::cli::{self, Commands};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match &cli.command {
        None => cli::report::handle_report(&cli).await,
        Some(Commands::Validate) => cli::validate::handle_validate(&cli).await,
    };

    if let Err(e) = result {
        let class = e.classify();
        error!(error_type = class.error_type, "Run aborted");
        eprintln!("Error: {}", e);
        std::process::exit(class.exit_code);
    }
}
