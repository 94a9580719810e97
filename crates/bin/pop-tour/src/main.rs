//! pop-tour CLI
//!
//! Runs the capability lessons and prints what each generic call resolved to.
//!
//! ## Usage
//!
//! ```bash
//! # list lessons
//! pop-tour list
//!
//! # run everything as text
//! pop-tour run
//!
//! # run two lessons, JSON output
//! pop-tour run --lesson increment --lesson self-factory --format json
//!
//! # lessons and format from a file, flags still win
//! pop-tour run --config tour.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use capabilities::{run_all, Lesson, LessonOutcome, OutputFormat, TourConfig};

#[derive(Parser)]
#[command(name = "pop-tour")]
#[command(about = "Capability dispatch lessons, resolved by the type checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List lessons in tour order
    List,

    /// Run lessons and print their outcomes
    Run {
        /// Lesson to run (repeatable, default: all)
        #[arg(short, long)]
        lesson: Vec<Lesson>,

        /// Output format (text, json)
        #[arg(short, long, env = "POP_TOUR_FORMAT")]
        format: Option<OutputFormat>,

        /// JSON config file with `lessons` and `format`
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<TourConfig> {
    let Some(path) = path else {
        return Ok(TourConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: TourConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(path = %path.display(), lessons = cfg.lessons.len(), "loaded config");
    Ok(cfg)
}

fn render(format: OutputFormat, outcomes: &[LessonOutcome]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcomes.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(outcomes).context("serializing outcomes"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(format!("pop_tour={level},capabilities={level}"))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List => {
            for lesson in Lesson::ALL {
                println!("{:<28} {}", lesson.name(), lesson.summary());
            }
        }
        Commands::Run { lesson, format, config } => {
            let cfg = load_config(config.as_deref())?.with_overrides(lesson, format);
            cfg.validate()?;

            info!(lessons = cfg.lessons.len(), format = %cfg.format, "running tour");
            let outcomes = run_all(&cfg.lessons);
            println!("{}", render(cfg.format, &outcomes)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_parses_lessons_and_format() {
        let cli = Cli::try_parse_from([
            "pop-tour", "run", "-l", "increment", "--lesson", "self-factory", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { lesson, format, config } => {
                assert_eq!(lesson, [Lesson::Increment, Lesson::SelfFactory]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(config.is_none());
            }
            Commands::List => panic!("expected run"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_lesson() {
        assert!(Cli::try_parse_from(["pop-tour", "run", "-l", "nope"]).is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lessons": ["mixed-materials"] }}"#).unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.lessons, [Lesson::MixedMaterials]);
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_config_reports_path() {
        let err = load_config(Some(Path::new("/nonexistent/tour.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tour.json"));
    }

    #[test]
    fn test_render_formats() {
        let outcomes = run_all(&[Lesson::Increment]);

        let text = render(OutputFormat::Text, &outcomes).unwrap();
        assert!(text.starts_with("== increment"));
        assert!(text.contains("increment(1) = 2"));

        let json = render(OutputFormat::Json, &outcomes).unwrap();
        let back: Vec<LessonOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcomes);
    }
}
