use clap::{Parser, Subcommand};

/// Word frequency analysis tool
#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
#[command(version, about = "Word frequency analysis tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the analyzer over HTTP
    Serve(ServeArgs),
    /// Analyze a text file and print word frequencies
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "WORDFREQ_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'P', long, env = "WORDFREQ_PORT", default_value = "5000")]
    pub port: u16,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["wordfreq", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                // env vars may override in CI, so only check when unset
                if std::env::var_os("WORDFREQ_HOST").is_none() {
                    assert_eq!(args.host, "0.0.0.0");
                }
                if std::env::var_os("WORDFREQ_PORT").is_none() {
                    assert_eq!(args.port, 5000);
                }
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn analyze_flags() {
        let cli = Cli::try_parse_from([
            "wordfreq",
            "analyze",
            "--output-format",
            "json",
            "--input",
            "notes.txt",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.output_format, "json");
                assert_eq!(args.input, "notes.txt");
                assert!(!args.stdin);
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }
}
