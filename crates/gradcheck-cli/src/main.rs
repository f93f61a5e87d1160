mod display;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{Level, info};

use gradcheck_audit::{AuditReport, ProgressSummary, current_roc_year, run_audit};
use gradcheck_core::{CourseRecord, RequirementProfile, StudentInfo};
use gradcheck_extract::source::load_pages;
use gradcheck_extract::{Transcript, scan_text_pages};

#[derive(Parser)]
#[command(name = "gradcheck")]
#[command(version, about = "Graduation credit audit from registrar transcripts")]
#[command(propagate_version = true)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a transcript against a requirement profile
    Audit {
        /// Transcript as a `.pdf` or a form-feed separated text dump
        path: PathBuf,

        /// Requirement profile JSON (default: reference degree)
        #[arg(long, env = "GRADCHECK_PROFILE")]
        profile: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Card)]
        format: OutputFormat,

        /// Also write the parsed records as JSON to this file
        #[arg(long)]
        dump_parsed: Option<PathBuf>,

        /// Current academic year, ROC calendar (default: from the clock)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the parsed records and student info as JSON
    Parse {
        /// Transcript as a `.pdf` or a form-feed separated text dump
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Card,
    Json,
}

/// JSON output of `gradcheck audit --format json`.
#[derive(Serialize)]
struct AuditDocument<'a> {
    student_info: &'a StudentInfo,
    #[serde(flatten)]
    report: &'a AuditReport,
    summary: &'a ProgressSummary,
}

/// JSON output of `gradcheck parse` and `--dump-parsed`: the extracted
/// transcript plus the fields derived from it per record.
#[derive(Serialize)]
struct ParsedDocument<'a> {
    student_info: &'a StudentInfo,
    major: Option<String>,
    status: Option<String>,
    all_courses: Vec<ParsedCourse<'a>>,
}

#[derive(Serialize)]
struct ParsedCourse<'a> {
    #[serde(flatten)]
    record: &'a CourseRecord,
    semester: String,
    offering_department: String,
}

impl<'a> ParsedDocument<'a> {
    fn new(transcript: &'a Transcript) -> Self {
        let (major, status) = transcript.student_info.major_and_status().unzip();
        Self {
            student_info: &transcript.student_info,
            major,
            status,
            all_courses: transcript
                .courses
                .iter()
                .map(|record| ParsedCourse {
                    record,
                    semester: record.semester_label(),
                    offering_department: record.offering_department(),
                })
                .collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match cli.command {
        Commands::Audit {
            path,
            profile,
            format,
            dump_parsed,
            year,
        } => cmd_audit(&path, profile.as_deref(), format, dump_parsed.as_deref(), year),
        Commands::Parse { path } => cmd_parse(&path),
    }
}

fn cmd_audit(
    path: &Path,
    profile: Option<&Path>,
    format: OutputFormat,
    dump_parsed: Option<&Path>,
    year: Option<i32>,
) -> anyhow::Result<()> {
    let profile = match profile {
        Some(p) => RequirementProfile::load(p)
            .with_context(|| format!("loading profile {}", p.display()))?,
        None => RequirementProfile::default(),
    };

    let transcript = read_transcript(path)?;
    if let Some(dump) = dump_parsed {
        write_json(dump, &ParsedDocument::new(&transcript))?;
        info!(path = %dump.display(), "wrote parsed records");
    }

    let report = run_audit(&transcript.courses, &profile);
    let summary = ProgressSummary::build(
        &transcript.student_info,
        &transcript.courses,
        &report,
        year.unwrap_or_else(current_roc_year),
    );

    match format {
        OutputFormat::Card => {
            print!(
                "{}",
                display::render_card(&transcript.student_info, &report, &summary)?
            );
        }
        OutputFormat::Json => {
            let doc = AuditDocument {
                student_info: &transcript.student_info,
                report: &report,
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn cmd_parse(path: &Path) -> anyhow::Result<()> {
    let transcript = read_transcript(path)?;
    let doc = ParsedDocument::new(&transcript);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn read_transcript(path: &Path) -> anyhow::Result<Transcript> {
    let pages = load_pages(path)?;
    let transcript = scan_text_pages(&pages)
        .with_context(|| format!("extracting courses from {}", path.display()))?;
    Ok(transcript)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
