//! unfurnish CLI - document element stream cleanup tool

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unfurnish::batch::clean_files_with_progress;
use unfurnish::model::{page_break_positions, page_count};
use unfurnish::{
    find_footer_length, json, CleanupOptions, CleanupPipeline, CleanupPreset, CleanupStats,
    FooterOptions, JsonFormat, SimilarityMetric, Stage,
};

#[derive(Parser)]
#[command(name = "unfurnish")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Strip page furniture from extracted document element streams", long_about = None)]
struct Cli {
    /// Input JSON element file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Cleanup preset
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean one or more JSON element files
    Clean {
        /// Input JSON element files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file, or output directory when several inputs are given
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print per-stage removal statistics to stderr
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        cleanup: CleanupArgs,
    },

    /// Infer the running footer length of a document
    Footer {
        /// Input JSON element file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        footer: FooterArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show element and page counts
    Info {
        /// Input JSON element file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct CleanupArgs {
    /// Cleanup preset
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    #[command(flatten)]
    footer: FooterArgs,

    /// Brand marker for logo images (repeatable, replaces the defaults)
    #[arg(long = "brand", value_name = "TEXT")]
    brands: Vec<String>,

    /// Keep cover, title and table of contents pages
    #[arg(long)]
    keep_leading: bool,

    /// Keep trailing index pages
    #[arg(long)]
    keep_index: bool,

    /// Keep table of contents spill-over at the start
    #[arg(long)]
    keep_toc: bool,
}

#[derive(Args, Default)]
struct FooterArgs {
    /// Minimum footer similarity (0.0-1.0)
    #[arg(long, value_name = "F", env = "UNFURNISH_THRESHOLD")]
    threshold: Option<f64>,

    /// Percentage of pages allowed to deviate (0-100)
    #[arg(long, value_name = "P", env = "UNFURNISH_TOLERANCE")]
    tolerance: Option<f64>,

    /// Longest footer to try, in elements
    #[arg(long, value_name = "N")]
    max_footer: Option<usize>,

    /// Similarity metric used to compare footers
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Page break markers only
    Minimal,
    /// Footers and page breaks
    Layout,
    /// Every stage (default)
    Standard,
}

impl From<PresetArg> for CleanupPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Minimal => CleanupPreset::Minimal,
            PresetArg::Layout => CleanupPreset::Layout,
            PresetArg::Standard => CleanupPreset::Standard,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    /// Insertion/deletion ratio (default)
    Indel,
    /// Normalized Levenshtein distance
    Levenshtein,
    /// Jaro-Winkler
    JaroWinkler,
    /// Sørensen-Dice over bigrams
    SorensenDice,
}

impl From<MetricArg> for SimilarityMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Indel => SimilarityMetric::Indel,
            MetricArg::Levenshtein => SimilarityMetric::Levenshtein,
            MetricArg::JaroWinkler => SimilarityMetric::JaroWinkler,
            MetricArg::SorensenDice => SimilarityMetric::SorensenDice,
        }
    }
}

impl FooterArgs {
    fn apply(&self, mut footer: FooterOptions) -> FooterOptions {
        if let Some(threshold) = self.threshold {
            footer.threshold = threshold;
        }
        if let Some(tolerance) = self.tolerance {
            footer.tolerance_percentage = tolerance;
        }
        if let Some(max_length) = self.max_footer {
            footer.max_length = max_length;
        }
        if let Some(metric) = self.metric {
            footer.metric = metric.into();
        }
        footer
    }
}

impl CleanupArgs {
    fn to_options(&self) -> CleanupOptions {
        let preset = self.preset.map(CleanupPreset::from).unwrap_or_default();
        let mut options = CleanupOptions::from_preset(preset);

        let footer = self.footer.apply(options.footer.clone());
        options = options.with_footer(footer);

        if !self.brands.is_empty() {
            options = options.with_brand_markers(self.brands.iter().cloned());
        }
        if self.keep_leading {
            options = options.with_leading_matter(false);
        }
        if self.keep_index {
            options = options.with_trailing_index(false);
        }
        if self.keep_toc {
            options = options.with_toc_continuation(false);
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clean {
            inputs,
            output,
            compact,
            stats,
            cleanup,
        }) => cmd_clean(&inputs, output.as_deref(), &cleanup, compact, stats),
        Some(Commands::Footer {
            input,
            footer,
            json,
        }) => cmd_footer(&input, &footer, json),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: clean if input is provided
            if let Some(input) = cli.input {
                let cleanup = CleanupArgs {
                    preset: cli.preset,
                    ..CleanupArgs::default()
                };
                cmd_clean(&[input], cli.output.as_deref(), &cleanup, false, false)
            } else {
                println!("{}", "Usage: unfurnish <FILE> [OUTPUT]".yellow());
                println!("       unfurnish --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    inputs: &[PathBuf],
    output: Option<&Path>,
    cleanup: &CleanupArgs,
    compact: bool,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = CleanupPipeline::new(cleanup.to_options())?;
    log::debug!("options: {:?}", pipeline.options());
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let [input] = inputs {
        let elements = json::from_file(input)?;
        let result = pipeline.process_with_stats(elements);

        if let Some(path) = output {
            json::to_file(path, &result.elements, format)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", json::to_string(&result.elements, format)?);
        }

        if stats {
            print_stats(input, &result.stats);
        }
        return Ok(());
    }

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Cleaning...");
    let results = clean_files_with_progress(inputs, &pipeline, |_| pb.inc(1));
    pb.set_message("Writing...");

    let mut failures = Vec::new();
    let mut written = Vec::new();
    for (input, result) in results {
        match result {
            Ok(result) => {
                let target = output_path(&input, output);
                match json::to_file(&target, &result.elements, format) {
                    Ok(()) => written.push((input, target, result.stats)),
                    Err(e) => failures.push((input, e.to_string())),
                }
            }
            Err(e) => failures.push((input, e.to_string())),
        }
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, (_, target, _)) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), target.display());
    }

    if stats {
        for (input, _, file_stats) in &written {
            print_stats(input, file_stats);
        }
    }

    if !failures.is_empty() {
        for (input, message) in &failures {
            eprintln!("{} {}: {}", "Failed".red(), input.display(), message);
        }
        return Err(format!("{} of {} files failed", failures.len(), inputs.len()).into());
    }

    Ok(())
}

/// Where the cleaned copy of `input` goes: `<stem>.clean.json` in `dir`,
/// or next to the input.
fn output_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}.clean.json", stem);
    match dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn print_stats(input: &Path, stats: &CleanupStats) {
    eprintln!();
    eprintln!("{} {}", "Cleanup Statistics".cyan().bold(), input.display());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!(
        "{}: {} elements, {} pages",
        "Input".bold(),
        stats.input_elements,
        stats.input_pages
    );
    for stage in Stage::ALL {
        eprintln!("  {:<22} {}", stage.name(), stats.removed_by(stage));
    }
    eprintln!("{}: {}", "Footer length".bold(), stats.footer_length);
    for text in &stats.mismatched_footers {
        eprintln!("  {} {}", "≠".yellow(), text);
    }
    eprintln!(
        "{}: {} elements ({} removed)",
        "Output".bold(),
        stats.output_elements,
        stats.total_removed()
    );
}

fn cmd_footer(
    input: &Path,
    args: &FooterArgs,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let elements = json::from_file(input)?;
    let options = args.apply(FooterOptions::default());
    options.validate()?;

    let fingerprint = find_footer_length(&elements, &options, &options.metric);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&fingerprint)?);
        return Ok(());
    }

    println!("{}", "Footer Fingerprint".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Page breaks".bold(), page_break_positions(&elements).len());
    if !fingerprint.is_detected() {
        println!("{}", "No repeated footer detected".yellow());
        return Ok(());
    }
    println!("{}: {}", "Footer length".bold(), fingerprint.length);
    println!("{}: {}", "Mismatched".bold(), fingerprint.mismatched.len());
    for text in &fingerprint.mismatched {
        println!("  {} {}", "≠".yellow(), text);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let elements = json::from_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Elements".bold(), elements.len());
    println!("{}: {}", "Pages".bold(), page_count(&elements));

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for element in &elements {
        *categories.entry(element.category.as_str()).or_default() += 1;
    }

    println!();
    println!("{}", "Categories".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (category, count) in &categories {
        println!("{}: {}", category.bold(), count);
    }

    let words: usize = elements
        .iter()
        .map(|e| e.text.split_whitespace().count())
        .sum();
    println!();
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unfurnish".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document element stream cleanup tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unfurnish".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unfurnish::Element;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("docs/guide.json"), None),
            PathBuf::from("docs/guide.clean.json")
        );
        assert_eq!(
            output_path(Path::new("docs/guide.json"), Some(Path::new("out"))),
            PathBuf::from("out/guide.clean.json")
        );
    }

    #[test]
    fn test_cleanup_args_to_options() {
        let args = CleanupArgs {
            preset: Some(PresetArg::Layout),
            footer: FooterArgs {
                threshold: Some(0.9),
                metric: Some(MetricArg::Levenshtein),
                ..FooterArgs::default()
            },
            brands: vec!["Acme".to_string()],
            keep_toc: true,
            ..CleanupArgs::default()
        };
        let options = args.to_options();

        assert!(!options.remove_leading_matter);
        assert!(options.remove_footers);
        assert!(!options.remove_toc_continuation);
        assert_eq!(options.footer.threshold, 0.9);
        assert_eq!(options.footer.tolerance_percentage, 7.0);
        assert_eq!(options.footer.metric, SimilarityMetric::Levenshtein);
        assert_eq!(options.brand_markers, vec!["Acme".to_string()]);
    }

    #[test]
    fn test_keep_flags_disable_stages() {
        let args = CleanupArgs {
            keep_leading: true,
            keep_index: true,
            ..CleanupArgs::default()
        };
        let options = args.to_options();

        assert!(!options.remove_leading_matter);
        assert!(!options.remove_trailing_index);
        assert!(options.remove_branded_images);
    }

    #[test]
    fn test_clean_batch_writes_next_to_inputs() {
        let dir = TempDir::new().unwrap();
        let elements = vec![
            Element::text("Cover", 1),
            Element::page_break(1),
            Element::text("Body", 2),
        ];
        let first = dir.path().join("one.json");
        let second = dir.path().join("two.json");
        json::to_file(&first, &elements, JsonFormat::Pretty).unwrap();
        json::to_file(&second, &elements, JsonFormat::Pretty).unwrap();

        cmd_clean(
            &[first, second],
            None,
            &CleanupArgs::default(),
            true,
            false,
        )
        .unwrap();

        let cleaned = json::from_file(dir.path().join("one.clean.json")).unwrap();
        assert_eq!(cleaned, vec![Element::text("Body", 2)]);
        assert!(dir.path().join("two.clean.json").exists());
    }
}
