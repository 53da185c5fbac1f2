use anyhow::{Context, Result};
use clap::Parser;
use mediasort::mediasort_core::organize::{OrganizeOptions, organize};
use mediasort::mediasort_core::{Cli, Config, ExiftoolDateResolver, cli};
use simplelog::{CombinedLogger, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            simplelog::Config::default(),
            File::create("mediasort.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let dest_dir = match cli.dest_dir {
        Some(dir) => dir,
        None => cli::default_destination()
            .context("cannot determine home directory; pass dest_dir explicitly")?,
    };

    let config = Config::default();
    let mut resolver = ExiftoolDateResolver::new();
    let opts = OrganizeOptions {
        fast: cli.fast,
        dry_run: cli.dry_run,
        on_duplicate: cli.on_duplicate,
    };

    let stats = organize(&cli.source_dir, &dest_dir, &config, &mut resolver, &opts)?;

    if cli.dry_run {
        println!("\n[DRY RUN] No files were changed.");
    }
    println!("\nOrganize complete!");
    println!("  {} files moved", stats.moved);
    if stats.renamed > 0 {
        println!("  {} renamed for uniqueness", stats.renamed);
    }
    if stats.overwritten > 0 {
        println!("  {} overwritten", stats.overwritten);
    }
    if stats.skipped > 0 {
        println!("  {} skipped", stats.skipped);
    }
    if stats.source_deleted > 0 {
        println!("  {} duplicate sources removed", stats.source_deleted);
    }
    if stats.sidecars_moved > 0 {
        println!("  {} sidecars moved", stats.sidecars_moved);
    }
    if stats.failed > 0 {
        println!("  {} failures (see log)", stats.failed);
    }

    Ok(())
}
