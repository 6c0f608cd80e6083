use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info};
use timeliner_engine::{render_chart, sort_records, write_timeline};
use timeliner_fs::{ExtensionFilter, MaxDepth, ScanOptions, TimeField, TimeFormat, collect};
use timeliner_runtime::resolve_output_path;

use crate::prompt::confirm_overwrite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Access Time
    Atime,
    /// Modified Time
    Mtime,
    /// Created Time (change time where creation time is unavailable)
    Ctime,
}

impl From<SortArg> for TimeField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Atime => TimeField::Accessed,
            SortArg::Mtime => TimeField::Modified,
            SortArg::Ctime => TimeField::Created,
        }
    }
}

fn parse_max_depth(s: &str) -> Result<MaxDepth, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {s}"))?;
    MaxDepth::try_from(n).map_err(|e| e.to_string())
}

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Path of the folder to create the timeline from
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output file path ('default' writes filetimeline.csv next to the program)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also write a chart of file sizes over time to <OUTPUT>.html
    #[arg(long, short = 'g')]
    pub graph: bool,

    /// Display times in human-readable format (UTC)
    #[arg(long = "human-readable", short = 'H')]
    pub human_readable: bool,

    /// Sort by Access Time (atime), Modified Time (mtime), or Created Time (ctime)
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortArg>,

    /// Maximum depth of recursion in subdirectories (-1 for unlimited)
    #[arg(
        long = "max-depth",
        short = 'd',
        default_value = "-1",
        allow_negative_numbers = true,
        value_parser = parse_max_depth
    )]
    pub max_depth: MaxDepth,

    /// Filter files by the specified file extension (e.g., '.txt')
    #[arg(long = "filter-extension", short = 'e')]
    pub filter_extension: Option<String>,

    /// Overwrite an existing output file without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TimelineArgs {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.max_depth,
            extension: ExtensionFilter::new(self.filter_extension.as_deref()),
            format: TimeFormat::from_human_readable(self.human_readable),
        }
    }

    fn sort_field(&self) -> TimeField {
        self.sort.map(TimeField::from).unwrap_or_default()
    }

    /// Every file this run writes, timeline first.
    fn destinations(&self, output: PathBuf) -> Vec<PathBuf> {
        let chart = self.graph.then(|| chart_path(&output));
        std::iter::once(output).chain(chart).collect()
    }
}

/// Where the chart for a timeline at `output` goes: `<output>.html`.
fn chart_path(output: &Path) -> PathBuf {
    let mut chart = output.as_os_str().to_owned();
    chart.push(".html");
    PathBuf::from(chart)
}

/// Whether writing to `path` would replace something, dangling symlinks
/// included.
fn destination_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

pub fn run(args: TimelineArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            debug!("[error] {e:#}");
            eprintln!("[error] {e:#}");
            ExitCode::from(1)
        }
    }
}

fn execute(args: TimelineArgs) -> Result<ExitCode> {
    let root = &args.path;

    if !root.exists() {
        eprintln!("Directory does not exist: {}", root.display());
        return Ok(ExitCode::from(1));
    }
    if !root.is_dir() {
        eprintln!("Not a directory: {}", root.display());
        return Ok(ExitCode::from(1));
    }

    let destinations = args.destinations(resolve_output_path(args.output.as_deref()));

    if !args.yes {
        for dest in destinations.iter().filter(|p| destination_taken(p)) {
            let confirmed = confirm_overwrite(dest, &mut io::stdin().lock(), &mut io::stderr())
                .context("failed to read overwrite confirmation")?;
            if !confirmed {
                eprintln!("Overwrite cancelled; {} left unchanged", dest.display());
                return Ok(ExitCode::from(1));
            }
        }
    }

    let opts = args.scan_options();
    let collection = collect(root, &opts, log::logger())
        .with_context(|| format!("failed to scan {}", root.display()))?;

    if collection.failed > 0 {
        info!(
            "[timeline] skipped {} entries that could not be read",
            collection.failed
        );
    }

    if collection.is_empty() {
        eprintln!("No files found in {}", root.display());
        return Ok(ExitCode::from(1));
    }

    let field = args.sort_field();
    let records = sort_records(collection.records, field);

    let output = &destinations[0];
    let count = write_timeline(output, &records)?;

    if let Some(chart) = destinations.get(1) {
        render_chart(chart, &records, field)
            .with_context(|| format!("failed to write chart to {}", chart.display()))?;
        println!("Timeline chart written to: {}", chart.display());
    }

    println!(
        "Metadata collected on {count} files written to: {}",
        output.display()
    );

    Ok(ExitCode::SUCCESS)
}
