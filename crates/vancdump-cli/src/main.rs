use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use glob::glob;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vancdump_core::{
    DumpError, DumpSummary, ErrorKind, FrameRate, TimestampOptions, dump_rcwt, dump_vanc_from_mcc,
    dump_vanc_from_mxf_data_stream,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("VANCDUMP_BUILD_COMMIT"),
    ", ",
    env!("VANCDUMP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "vancdump")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Dump closed-caption ancillary data from RCWT, MXF data streams and MCC files.",
    long_about = None,
    after_help = "Examples:\n  vancdump rcwt captions.rcwt --start-at-zero --round-to-fps 29.97\n  vancdump vanc --mxf-data-stream anc.mxf.dat -o anc.txt\n  vancdump vanc --mcc captions.mcc"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump timestamped caption triplets from an RCWT stream.
    Rcwt {
        /// Path to an RCWT file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        timestamps: TimestampArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Dump VANC packets from an MXF ancillary data stream or an MCC file.
    Vanc {
        #[command(flatten)]
        source: VancSource,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct TimestampArgs {
    /// Add a constant offset (milliseconds, may be negative)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_name = "MS")]
    offset_ms: i64,

    /// Shift times so the first record lands on the offset
    #[arg(long)]
    start_at_zero: bool,

    /// Print the difference to the previous record instead of absolute times
    #[arg(long)]
    time_deltas: bool,

    /// Round times to the nearest frame (23.976, 24, 25, 29.97, 30, 47.952, 48, 50, 59.94, 60)
    #[arg(long, value_name = "FPS")]
    round_to_fps: Option<FrameRate>,
}

impl From<&TimestampArgs> for TimestampOptions {
    fn from(args: &TimestampArgs) -> Self {
        TimestampOptions {
            offset_ms: args.offset_ms,
            start_at_zero: args.start_at_zero,
            time_deltas: args.time_deltas,
            round_to: args.round_to_fps,
        }
    }
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct VancSource {
    /// Extracted MXF ancillary data essence stream ("-" reads stdin)
    #[arg(long, value_name = "INPUT.mxf.dat")]
    mxf_data_stream: Option<PathBuf>,

    /// MacCaption MCC file ("-" reads stdin)
    #[arg(long, value_name = "INPUT.mcc")]
    mcc: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output text path ("-" or omitted writes stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write a JSON summary of the dump to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Rcwt {
            input,
            timestamps,
            output,
        } => cmd_rcwt(input, &timestamps, &output),
        Commands::Vanc { source, output } => cmd_vanc(source, &output),
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

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
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

fn dump_failure(err: DumpError, input: &Input) -> CliError {
    let hint = match err.kind() {
        ErrorKind::Format => Some("check that the input matches the selected format".to_string()),
        ErrorKind::UnsupportedVersion => Some("only RCWT version 00 01 is supported".to_string()),
        ErrorKind::Truncated => Some("the input ends inside a record; it may be cut short".to_string()),
        ErrorKind::Validation => Some("a caption line carries malformed hex data".to_string()),
        ErrorKind::Io => None,
    };
    CliError::new(format!("{}: {}", input, err), hint)
}

fn cmd_rcwt(
    input: Option<PathBuf>,
    timestamps: &TimestampArgs,
    output: &OutputArgs,
) -> Result<(), CliError> {
    let input = Input::resolve(input.as_deref())?;
    let options = TimestampOptions::from(timestamps);
    run_dump(&input, output, |reader, writer| dump_rcwt(reader, writer, options))
}

fn cmd_vanc(source: VancSource, output: &OutputArgs) -> Result<(), CliError> {
    match (source.mxf_data_stream, source.mcc) {
        (Some(path), None) => {
            let input = Input::resolve(Some(path.as_path()))?;
            run_dump(&input, output, |reader, writer| {
                dump_vanc_from_mxf_data_stream(reader, writer)
            })
        }
        (None, Some(path)) => {
            let input = Input::resolve(Some(path.as_path()))?;
            run_dump(&input, output, |reader, writer| dump_vanc_from_mcc(reader, writer))
        }
        _ => Err(CliError::new(
            "exactly one VANC source is required",
            Some("use --mxf-data-stream or --mcc".to_string()),
        )),
    }
}

fn run_dump<F>(input: &Input, args: &OutputArgs, dump: F) -> Result<(), CliError>
where
    F: FnOnce(Box<dyn BufRead>, &mut Box<dyn Write>) -> Result<DumpSummary, DumpError>,
{
    let output = Output::from_arg(args.output.as_deref());
    ensure_distinct(input, &output)?;

    debug!(%input, %output, "starting dump");
    let reader = input.open()?;
    let mut writer = output.open()?;
    let result = dump(reader, &mut writer);
    let flushed = writer.flush();

    let summary = result.map_err(|err| dump_failure(err, input))?;
    flushed.with_context(|| format!("Failed to write output: {}", output))?;

    if let Some(path) = args.summary.as_ref() {
        write_summary(path, &summary)?;
    }
    if !args.quiet {
        if let Output::File(path) = &output {
            eprintln!(
                "OK: {} records, {} lines -> {}",
                summary.records,
                summary.lines_written,
                path.display()
            );
        }
    }
    Ok(())
}

fn write_summary(path: &Path, summary: &DumpSummary) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(summary).context("JSON serialization failed")?;
    create_parent_dir(path)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    Ok(())
}

#[derive(Debug)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn resolve(arg: Option<&Path>) -> Result<Self, CliError> {
        let path = match arg {
            None => return Ok(Input::Stdin),
            Some(path) if path.as_os_str() == "-" => return Ok(Input::Stdin),
            Some(path) => path,
        };
        let resolved = resolve_input_path(path)?;
        validate_input_file(&resolved)?;
        Ok(Input::File(resolved))
    }

    fn open(&self) -> Result<Box<dyn BufRead>, CliError> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Output::File(path.to_path_buf()),
            _ => Output::Stdout,
        }
    }

    fn open(&self) -> Result<Box<dyn Write>, CliError> {
        match self {
            Output::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Output::File(path) => {
                create_parent_dir(path)?;
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Stdout => write!(f, "<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

fn ensure_distinct(input: &Input, output: &Output) -> Result<(), CliError> {
    let (Input::File(input_path), Output::File(output_path)) = (input, output) else {
        return Ok(());
    };
    let input_abs = fs::canonicalize(input_path)
        .with_context(|| format!("Failed to resolve input path: {}", input_path.display()))?;
    let output_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing output directory cannot contain the input.
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let Some(file_name) = output_path.file_name() else {
        return Err(CliError::new(
            format!("invalid output path: {}", output_path.display()),
            None,
        ));
    };
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output_path.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass an existing file, or \"-\" to read stdin".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a single RCWT, MXF data stream or MCC file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
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
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
