//! ragemeta CLI - Command-line tool for RAGE vehicle handling metadata.
//!
//! This is the main entry point for the ragemeta command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use ragemeta::prelude::*;

/// ragemeta - RAGE vehicle handling metadata tool
#[derive(Parser)]
#[command(name = "ragemeta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the records in a handling file
    Info {
        /// Input handling.meta file
        #[arg(short, long, env = "INPUT_META")]
        input: PathBuf,
    },

    /// Load a handling file and re-export it with canonical formatting
    Convert {
        /// Input handling.meta file
        #[arg(short, long)]
        input: PathBuf,

        /// Output .meta file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Dump a handling file's typed model as JSON
    Json {
        /// Input handling.meta file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Convert every .meta file under a directory
    Batch {
        /// Input directory
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,
        Commands::Convert { input, output } => cmd_convert(&input, &output)?,
        Commands::Json { input, output } => cmd_json(&input, &output)?,
        Commands::Batch { input, output } => cmd_batch(&input, &output)?,
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<()> {
    let start = Instant::now();
    let file = HandlingFile::from_meta(input).context("Failed to load handling file")?;

    println!(
        "Loaded {} records in {:?} from {}",
        file.handlings.len(),
        start.elapsed(),
        input.display()
    );

    for handling in &file.handlings {
        let kinds: Vec<&str> = handling
            .sub_handling_data
            .iter()
            .map(SubHandling::type_name)
            .collect();

        if kinds.is_empty() {
            println!("{:>24}  mass {:>10.1}", handling.handling_name, handling.f_mass);
        } else {
            println!(
                "{:>24}  mass {:>10.1}  [{}]",
                handling.handling_name,
                handling.f_mass,
                kinds.join(", ")
            );
        }
    }

    Ok(())
}

fn cmd_convert(input: &Path, output: &Path) -> Result<()> {
    println!("Converting: {} -> {}", input.display(), output.display());

    let file = HandlingFile::from_meta(input).context("Failed to load handling file")?;
    file.write_to_meta(output).context("Failed to write output file")?;

    println!("Wrote {} records", file.handlings.len());

    Ok(())
}

fn cmd_json(input: &Path, output: &Path) -> Result<()> {
    let file = HandlingFile::from_meta(input).context("Failed to load handling file")?;

    let json = serde_json::to_string_pretty(&file).context("Failed to serialize model")?;
    fs::write(output, json).context("Failed to write output file")?;

    println!("Dumped {} records to {}", file.handlings.len(), output.display());

    Ok(())
}

fn cmd_batch(input: &Path, output: &Path) -> Result<()> {
    let metas: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("meta"))
        .map(|e| e.into_path())
        .collect();

    println!("Converting {} files...", metas.len());

    let pb = ProgressBar::new(metas.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut failed = 0usize;

    for path in &metas {
        let relative = path.strip_prefix(input).unwrap_or(path);
        let output_path = output.join(relative);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        match HandlingFile::from_meta(path).and_then(|f| f.write_to_meta(&output_path)) {
            Ok(()) => {}
            Err(e) => {
                failed += 1;
                pb.println(format!("{}: {}", path.display(), e));
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!(
        "Converted {} files in {:?} ({} failed)",
        metas.len() - failed,
        start.elapsed(),
        failed
    );

    Ok(())
}
