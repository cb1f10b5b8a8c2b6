//! Command-line interface for snapfold.
//!
//! Loads `snapfold.config` when present, applies command-line overrides,
//! and bundles the root directory into a single markdown snapshot.

use clap::Parser;
use snapfold::{NamingMode, SnapfoldError, SnapfoldOptions, config, scan, snapfold};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

/// snapfold — bundle a project directory into one markdown snapshot
#[derive(Parser)]
#[command(name = "snapfold", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan (overrides the config file)
    root: Option<PathBuf>,

    /// Output path for the generated document
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Names to ignore at any depth (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Maximum file size in bytes (larger files are skipped)
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Only include these extensions (can be repeated; enables the allow-list)
    #[arg(long = "only")]
    only_formats: Vec<String>,

    /// Skip the tree overview section
    #[arg(long)]
    no_tree: bool,

    /// Output naming mode
    #[arg(long, value_parser = parse_naming_mode)]
    naming_mode: Option<NamingMode>,

    /// List the files that would be bundled, without writing anything
    #[arg(long)]
    dry_run: bool,
}

/// Parse string into NamingMode enum, rejecting unknown values at the CLI
/// (the config-file fallback to timestamp only applies to config files).
fn parse_naming_mode(s: &str) -> Result<NamingMode, String> {
    match s {
        "timestamp" => Ok(NamingMode::Timestamp),
        "increment" => Ok(NamingMode::Increment),
        "overwrite" => Ok(NamingMode::Overwrite),
        _ => Err(format!("invalid naming mode: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Result<(SnapfoldOptions, bool), SnapfoldError> {
        let mut options = config::load_config(&self.config)?;
        if let Some(root) = self.root {
            options.root = root;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if !self.ignore.is_empty() {
            options.ignore = self.ignore;
        }
        if let Some(limit) = self.max_file_size {
            options.max_file_size = limit;
        }
        if !self.only_formats.is_empty() {
            options.only_formats = self.only_formats;
            options.enable_only_formats = true;
        }
        if self.no_tree {
            options.include_tree = false;
        }
        if let Some(mode) = self.naming_mode {
            options.naming_mode = mode;
        }
        Ok((options, self.dry_run))
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.init {
        match config::write_default_config(&cli.config) {
            Ok(true) => println!("Created {}", cli.config.display()),
            Ok(false) => println!("{} already exists", cli.config.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
        return;
    }

    let (options, dry_run) = match cli.into_options() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if dry_run {
        run_dry(&options);
        return;
    }

    let started = Instant::now();
    match snapfold(&options) {
        Ok(path) => {
            println!("Snapshot saved as: {}", path.display());
            println!("Completed in {:.2} seconds", started.elapsed().as_secs_f64());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run_dry(options: &SnapfoldOptions) {
    match scan(options) {
        Ok(snapshot) => {
            for file in &snapshot.files {
                println!("{}", file.rel_path.display());
            }
            println!("{} files would be bundled", snapshot.files.len());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
