use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    let args = ctfup::cli::Args::parse();

    // Filter must be chosen before the logger is initialized; RUST_LOG
    // still overrides the flag-derived default.
    let default_filter = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("Starting ctfup v{}", env!("CARGO_PKG_VERSION"));

    ctfup::cli::run(args)
}
