use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use hlkradar_core::{DecodeOptions, FRAME_LEN, Report};
use log::{LevelFilter, debug, info, warn};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("HLKRADAR_BUILD_COMMIT"),
    ", ",
    env!("HLKRADAR_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "hlkradar")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for HLK-LD2450 radar target report frames.",
    long_about = None,
    after_help = "Examples:\n  hlkradar frame decode frame.bin -o report.json\n  hlkradar frame decode --hex \"AA FF 03 00 ...\" --stdout"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on raw sensor frames.
    Frame {
        #[command(subcommand)]
        command: FrameCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FrameCommands {
    /// Decode one frame and generate a versioned JSON report.
    #[command(alias = "parse")]
    #[command(
        after_help = "Examples:\n  hlkradar frame decode frame.bin -o report.json\n  hlkradar frame parse 'captures/*.bin' --stdout --pretty\n  hlkradar frame decode --hex \"aa ff 03 00 05 80 0a 80 14 00 c8 00\" --stdout"
    )]
    Decode {
        /// Path to a file holding one raw frame (or a hex string with --hex)
        input: String,

        /// Treat INPUT as hex bytes instead of a path
        #[arg(long)]
        hex: bool,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Require the full frame including the 55 CC end magic
        #[arg(long)]
        strict: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Frame { command } => match command {
            FrameCommands::Decode {
                input,
                hex,
                report,
                stdout,
                pretty,
                compact,
                strict,
                quiet,
            } => cmd_frame_decode(
                DecodeArgs {
                    input,
                    hex,
                    report,
                    stdout,
                    pretty,
                    compact,
                    quiet,
                },
                DecodeOptions {
                    require_end_magic: strict,
                },
            ),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

struct DecodeArgs {
    input: String,
    hex: bool,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
}

/// Raw frame bytes plus the label recorded in the report.
struct FrameInput {
    label: String,
    path: Option<PathBuf>,
    bytes: Vec<u8>,
}

fn cmd_frame_decode(args: DecodeArgs, options: DecodeOptions) -> Result<(), CliError> {
    let input = if args.hex {
        FrameInput {
            label: "-".to_string(),
            path: None,
            bytes: parse_hex_input(&args.input)?,
        }
    } else {
        read_input_file(&args.input)?
    };
    debug!(
        "decoding {} ({} bytes, strict: {})",
        input.label,
        input.bytes.len(),
        options.require_end_magic
    );
    if input.bytes.len() > FRAME_LEN {
        warn!(
            "{}: {} trailing bytes after one frame are ignored",
            input.label,
            input.bytes.len() - FRAME_LEN
        );
    }

    let report_path = if args.stdout {
        None
    } else {
        Some(args.report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };
    if let (Some(report_path), Some(input_path)) = (report_path.as_ref(), input.path.as_ref()) {
        ensure_distinct_paths(report_path, input_path)?;
    }

    let rep = hlkradar_core::decode_report(&input.label, &input.bytes, &options).map_err(|err| {
        CliError::new(
            format!("frame decode failed: {err}"),
            Some(decode_hint(&options).to_string()),
        )
    })?;
    info!(
        "{}: {} of {} targets present",
        input.label,
        rep.frame.present_count(),
        rep.frame.targets.len()
    );
    let json = serialize_report(&rep, args.pretty, args.compact)?;

    let Some(report) = report_path else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !args.quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn decode_hint(options: &DecodeOptions) -> &'static str {
    if options.require_end_magic {
        "expected a 30-byte frame: aa ff 03 00, three 8-byte targets, 55 cc"
    } else {
        "expected a frame starting with aa ff 03 00 followed by three 8-byte targets"
    }
}

fn ensure_distinct_paths(report_path: &Path, input_path: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input_path)
        .with_context(|| format!("Failed to resolve input path: {}", input_path.display()))?;
    // A report in a directory that does not exist yet cannot be the input.
    let report_abs = report_path
        .parent()
        .filter(|parent| parent.as_os_str().is_empty() || parent.is_dir())
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
    if let Some(report_dir) = report_abs {
        let report_target = report_dir.join(
            report_path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
        );
        if report_target == input_abs {
            return Err(CliError::new(
                format!(
                    "report path must differ from input: {}",
                    report_path.display()
                ),
                Some("choose a different output path".to_string()),
            ));
        }
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn parse_hex_input(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();
    if digits.is_empty() {
        return Err(CliError::new(
            "empty hex input",
            Some("pass frame bytes such as \"aa ff 03 00 ...\"".to_string()),
        ));
    }
    hex::decode(&digits).map_err(|err| {
        CliError::new(
            format!("invalid hex input: {err}"),
            Some("use pairs of hex digits, optionally separated by spaces".to_string()),
        )
    })
}

fn read_input_file(input: &str) -> Result<FrameInput, CliError> {
    let path = resolve_input_path(input)?;
    validate_input_file(&path)?;
    let bytes = fs::read(&path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(FrameInput {
        label: path.display().to_string(),
        path: Some(path),
        bytes,
    })
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file holding one raw frame, or use --hex".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a file holding one raw frame, or use --hex".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(pattern: &str) -> Result<PathBuf, CliError> {
    if !is_glob_pattern(pattern) {
        return Ok(PathBuf::from(pattern));
    }

    let mut matches = Vec::new();
    let paths = glob(pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single frame file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>();
        message.push_str("; matches: ");
        message.push_str(&listed.join(", "));
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

#[cfg(test)]
mod tests {
    use super::{is_glob_pattern, parse_hex_input};

    #[test]
    fn hex_input_accepts_separators_and_prefixes() {
        let bytes = parse_hex_input("0xAA 0xff,03:00").unwrap();
        assert_eq!(bytes, vec![0xAA, 0xFF, 0x03, 0x00]);
    }

    #[test]
    fn hex_input_rejects_odd_digits() {
        let err = parse_hex_input("aa f").unwrap_err();
        assert!(err.message.contains("invalid hex input"));
    }

    #[test]
    fn hex_input_rejects_empty() {
        let err = parse_hex_input("  ").unwrap_err();
        assert!(err.message.contains("empty hex input"));
    }

    #[test]
    fn glob_detection() {
        assert!(is_glob_pattern("captures/*.bin"));
        assert!(!is_glob_pattern("frame.bin"));
    }
}
