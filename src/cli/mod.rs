use crate::config::CtfConfig;
use crate::report;
use crate::scanner;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(clap::Parser, Debug)]
#[command(name = "ctfup")]
#[command(version, about = "Organizer for CTF write-up repositories", long_about = None)]
pub struct Args {
    /// Configuration file (TOML, overrides built-in event defaults)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Dry run (show what would be done, write nothing)
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a flat repository and generate migration commands
    Migrate {
        /// Flat repository to analyze
        repo: Option<PathBuf>,
    },

    /// Regenerate README.md for a categorized repository
    Readme {
        /// Repository root (default: current directory)
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => CtfConfig::load(path)?,
        None => CtfConfig::default(),
    };
    debug!("Using event config for {}", config.name);

    match &args.command {
        Commands::Migrate { repo } => migrate(repo.as_deref(), &args),
        Commands::Readme { root } => generate_readme(root, &config, &args),
    }
}

/// Scan a flat repository, classify its write-ups and emit migrate.sh
/// plus NEW_README.md for manual review. The migration script is never
/// executed here; file moves are destructive and get a human pass first.
fn migrate(repo: Option<&Path>, args: &Args) -> Result<()> {
    let Some(repo) = repo else {
        bail!(
            "Usage: ctfup migrate <REPO>\n\n\
             Analyzes a flat CTF repo and generates migration commands."
        );
    };

    if !repo.exists() {
        bail!("{} does not exist", repo.display());
    }

    if !args.quiet {
        println!("Analyzing: {}", repo.display());
    }

    let challenges = scanner::analyze_flat_repo(repo)?;
    if challenges.is_empty() {
        bail!("No writeup files found in {}", repo.display());
    }

    if !args.quiet {
        println!("Found {} challenges:", challenges.len());
        for c in &challenges {
            println!(
                "  {} {} <- {}",
                format!("[{}]", c.category).cyan(),
                c.name.bold(),
                c.original_file
            );
        }
    }

    if args.dry_run {
        if !args.quiet {
            println!("\nDry run, nothing written");
        }
        return Ok(());
    }

    let repo_name = repo
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo.display().to_string());

    let script_path = repo.join("migrate.sh");
    std::fs::write(&script_path, report::migration_script(&repo_name, &challenges))
        .with_context(|| format!("Failed to write {}", script_path.display()))?;

    let stub_path = repo.join("NEW_README.md");
    std::fs::write(&stub_path, report::readme_stub(&repo_name, &challenges))
        .with_context(|| format!("Failed to write {}", stub_path.display()))?;

    if !args.quiet {
        println!("\nGenerated: {}", script_path.display());
        println!("Generated: {}", stub_path.display());
        println!("\nNext steps:");
        println!("  1. cd {}", repo.display());
        println!("  2. Review migrate.sh and NEW_README.md");
        println!("  3. chmod +x migrate.sh && ./migrate.sh");
        println!("  4. mv NEW_README.md README.md");
        println!("  5. Run 'ctfup readme' for future regeneration");
    }

    Ok(())
}

/// Scan a categorized repository and overwrite its README.md.
fn generate_readme(root: &Path, config: &CtfConfig, args: &Args) -> Result<()> {
    let challenges = scanner::scan_challenges(root, config);
    let (solved, total) = scanner::solved_totals(&challenges);

    if !args.dry_run {
        let readme_path = root.join("README.md");
        std::fs::write(&readme_path, report::render_readme(config, &challenges))
            .with_context(|| format!("Failed to write {}", readme_path.display()))?;

        if !args.quiet {
            println!("Generated {}", readme_path.display());
        }
    }

    if !args.quiet {
        println!("Stats: {solved}/{total} challenges solved");
    }

    Ok(())
}
