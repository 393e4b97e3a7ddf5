mod canon;
mod error;
mod files;
mod parser;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "playlist_canon",
    about = "Turn scraped movie playlists into clean, deduplicated Markdown lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every playlist in a directory to a sibling Markdown file
    Convert {
        /// Directory to scan (default: PLAYLIST_INPUT_DIR or "docs/playlists/new canon")
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Max files to convert (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// Remove each source file after its output is written
        #[arg(long)]
        delete_source: bool,
        /// Parse and report counts without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the converted report for a single playlist file
    Show {
        file: PathBuf,
    },
    /// Bundle converted Markdown lists into one JSON catalog
    Export {
        /// Directory holding the converted lists
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("loading settings")?;

    match cli.command {
        Commands::Convert {
            dir,
            limit,
            recursive,
            delete_source,
            dry_run,
        } => {
            let dir = dir.unwrap_or_else(|| settings.input_dir.clone());
            let mut inputs = files::discover(&dir, &settings.input_ext, recursive)
                .with_context(|| format!("scanning {}", dir.display()))?;
            if let Some(n) = limit {
                inputs.truncate(n);
            }
            if inputs.is_empty() {
                println!("No .{} files in {}", settings.input_ext, dir.display());
                return Ok(());
            }

            let opts = ConvertOptions {
                output_ext: &settings.output_ext,
                delete_source: delete_source || settings.delete_source,
                dry_run,
            };
            println!("Converting {} files...", inputs.len());
            let counts = convert_files(&inputs, &opts);
            counts.print();
        }
        Commands::Show { file } => {
            let text = files::read_document(&file)?;
            let report = parser::process_document(&text, &files::source_name(&file));
            print!("{}", report.render());
        }
        Commands::Export { dir, out } => {
            let dir = dir.unwrap_or_else(|| settings.input_dir.clone());
            let lists = canon::collect(&dir, &settings.output_ext)
                .with_context(|| format!("reading lists in {}", dir.display()))?;
            let json = canon::to_json(&lists)?;
            match out {
                Some(path) => {
                    files::write_report(&path, &json)?;
                    info!(lists = lists.len(), path = %path.display(), "catalog written");
                }
                None => println!("{}", json),
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

struct ConvertOptions<'a> {
    output_ext: &'a str,
    delete_source: bool,
    dry_run: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ConvertCounts {
    files: usize,
    movies: usize,
    errors: usize,
}

impl ConvertCounts {
    fn print(&self) {
        println!(
            "Converted {} files ({} movies, {} errors).",
            self.files, self.movies, self.errors
        );
    }
}

/// Reads and parses in parallel, writes on the calling thread.
fn convert_files(inputs: &[PathBuf], opts: &ConvertOptions) -> ConvertCounts {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(inputs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut counts = ConvertCounts::default();

    for chunk in inputs.chunks(64) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| {
                files::read_document(path)
                    .map(|text| parser::process_document(&text, &files::source_name(path)))
            })
            .collect();

        for (path, result) in chunk.iter().zip(results) {
            match result.and_then(|report| save(path, &report, opts).map(|_| report)) {
                Ok(report) => {
                    counts.files += 1;
                    counts.movies += report.movies.len();
                }
                Err(e) => {
                    counts.errors += 1;
                    warn!(error = %e, "conversion failed");
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    counts
}

fn save(input: &Path, report: &parser::report::Report, opts: &ConvertOptions) -> error::Result<()> {
    let output = files::output_path(input, opts.output_ext);
    if opts.dry_run {
        info!(input = %input.display(), movies = report.movies.len(), "dry run");
        return Ok(());
    }
    files::write_report(&output, &report.render())?;
    info!(output = %output.display(), movies = report.movies.len(), "written");
    if opts.delete_source && output != input {
        files::remove_source(input)?;
        info!(input = %input.display(), "source removed");
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──
