use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod analyze_cmd;
mod cli;
mod error;
mod serve_cmd;
mod server;
mod shared;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use error::{OutputFormat, output_format_hint, parse_output_format, render_error};
use serve_cmd::run_serve;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "wordfreq=debug,tower_http=debug"
    } else {
        "wordfreq=info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Serve(args) => match run_serve(args) {
            Ok(code) => code,
            Err(err) => render_error(&err, OutputFormat::Text),
        },
        Commands::Analyze(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_analyze(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
