//! Detect command implementation

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Args, ValueEnum};
use palscan_core::{defaults, Config, Input, Output, PalindromeDetector};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Inputs above this size get a latency warning
const LARGE_INPUT_BYTES: u64 = 1024 * 1024;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Text to scan directly
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob); stdin is read when neither
    /// --text nor --input is given
    #[arg(short, long, value_name = "FILE/PATTERN", num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum palindrome length in characters
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new()
            .range((defaults::USER_MIN_LENGTH as u64)..=(defaults::USER_MAX_LENGTH as u64))
    )]
    pub min_length: Option<usize>,

    /// Treat spaces as characters when validating results
    #[arg(short = 's', long)]
    pub include_spaces: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scan multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel scans (default: all cores)
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Count, timing and one palindrome per line
    Text,
    /// JSON array of per-source results
    Json,
    /// Markdown formatted output
    Markdown,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting palindrome detection");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = self.detector_config(&cli_config)?;
        log::debug!("Detector configuration: {:?}", config);
        let detector = PalindromeDetector::new(config).map_err(CliError::from)?;

        let format = self.resolve_format(&cli_config)?;
        let results = self.collect_results(&detector, &cli_config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter =
            create_formatter(format, writer, results.len() > 1, cli_config.output.pretty_json);

        for (source, output) in &results {
            formatter.format_result(source, output)?;
        }
        formatter.finish()?;

        log::info!("Scanned {} source(s)", results.len());
        Ok(())
    }

    /// Merge the config file with command-line overrides
    pub fn detector_config(&self, cli_config: &CliConfig) -> Result<Config, CliError> {
        let detection = &cli_config.detection;

        Config::builder()
            .min_length(self.min_length.unwrap_or(detection.min_length))
            .max_window(detection.max_window)
            .include_spaces(self.include_spaces || detection.include_spaces)
            .build()
            .map_err(CliError::from)
    }

    /// Pick the output format: flag first, then config file
    pub fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat, CliError> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&cli_config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                cli_config.output.default_format
            ))
        })
    }

    /// Number of worker threads for parallel scans
    fn worker_threads(&self, cli_config: &CliConfig) -> usize {
        self.threads
            .or(match cli_config.performance.worker_threads {
                0 => None,
                n => Some(n),
            })
            .unwrap_or_else(num_cpus::get)
    }

    fn collect_results(
        &self,
        detector: &PalindromeDetector,
        cli_config: &CliConfig,
    ) -> Result<Vec<(String, Output)>> {
        if let Some(text) = &self.text {
            let output = detector.detect_text(text).map_err(CliError::from)?;
            return Ok(vec![("<text>".to_string(), output)]);
        }

        if self.input.is_empty() {
            log::debug!("Reading text from stdin");
            let output = detector
                .detect(Input::from_reader(io::stdin()))
                .map_err(CliError::from)?;
            return Ok(vec![("<stdin>".to_string(), output)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let scan = |path: &PathBuf| {
            let result = scan_file(detector, path);
            progress.file_completed(&path.display().to_string());
            result
        };

        let results = if self.parallel && files.len() > 1 {
            let threads = self.worker_threads(cli_config);
            log::debug!("Scanning in parallel on {} threads", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| files.par_iter().map(scan).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(scan).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(results)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

fn scan_file(detector: &PalindromeDetector, path: &Path) -> Result<(String, Output)> {
    let size = FileReader::file_size(path)?;
    if size > LARGE_INPUT_BYTES {
        log::warn!(
            "{} is {} bytes; scan time grows with input length",
            path.display(),
            size
        );
    }

    let text = FileReader::read_text(path)?;
    let output = detector.detect_text(&text).map_err(CliError::from)?;
    log::debug!(
        "{}: {} palindrome(s) in {:?}",
        path.display(),
        output.len(),
        output.metadata.duration
    );

    Ok((path.display().to_string(), output))
}

fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    multiple_sources: bool,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => {
            Box::new(TextFormatter::new(writer).with_source_headers(multiple_sources))
        }
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
