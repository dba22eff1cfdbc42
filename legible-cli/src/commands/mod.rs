//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod serve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze texts: statistics, readability scores and corrected text
    Analyze(analyze::AnalyzeArgs),

    /// Validate a segmentation rules file
    Validate(validate::ValidateArgs),

    /// Run the HTTP analysis service
    Serve(serve::ServeArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Serve(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the `-v` count. A second call is a no-op.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
