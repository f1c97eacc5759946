use std::any::Any;
use std::fmt::{Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use chandra_core::{OracleError, PipelineError, civil_from_fields, compute_report};
use chandra_ephem::{DEFAULT_EPHEMERIS_DIR, DEFAULT_SPK_FILE, JplOracle, OracleConfig};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

const FIELD_NAMES: [&str; 6] = ["YEAR", "MONTH", "DAY", "HOUR", "MINUTE", "SECOND"];

#[derive(Parser, Debug)]
#[command(
    name = "chandra",
    about = "Sidereal Moon longitude and nakshatra for a civil date and time",
    override_usage = "chandra [OPTIONS] YEAR MONTH DAY HOUR MINUTE SECOND",
    after_help = "Example: chandra 2025 10 25 19 51 0",
    allow_negative_numbers = true
)]
struct Cli {
    /// YEAR MONTH DAY HOUR MINUTE SECOND (integers; year may be negative)
    #[arg(value_name = "FIELD")]
    fields: Vec<String>,

    /// Directory containing the SPK kernel
    #[arg(long, env = "CHANDRA_EPHE_PATH", default_value = DEFAULT_EPHEMERIS_DIR)]
    ephe_path: PathBuf,

    /// SPK kernel file name, relative to --ephe-path unless absolute
    #[arg(long, default_value = DEFAULT_SPK_FILE)]
    spk: PathBuf,

    /// Append NAKSHATRA_NAME and PADA lines
    #[arg(long)]
    detail: bool,

    /// Debug logging on stderr (CHANDRA_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug)]
enum CliError {
    InvalidField { name: &'static str, value: String },
    Pipeline(PipelineError),
    Oracle(OracleError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { name, value } => {
                write!(f, "{name} must be an integer, got '{value}'")
            }
            Self::Pipeline(e) => write!(f, "{e}"),
            Self::Oracle(e) => write!(f, "{e}"),
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

impl From<OracleError> for CliError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(clap_message(&e)),
    };

    if let Err(msg) = init_tracing(cli.verbose) {
        return fail(msg);
    }

    if cli.fields.len() < FIELD_NAMES.len() {
        println!("{}", Cli::command().render_usage());
        println!("Example: chandra 2025 10 25 19 51 0");
        return ExitCode::from(1);
    }
    if cli.fields.len() > FIELD_NAMES.len() {
        debug!(ignored = ?&cli.fields[FIELD_NAMES.len()..], "extra arguments ignored");
    }

    // Panics are reported as ERROR lines instead of the default backtrace.
    panic::set_hook(Box::new(|info| debug!("panic: {info}")));
    match panic::catch_unwind(AssertUnwindSafe(|| run(&cli))) {
        Ok(Ok(report)) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => fail(e),
        Err(payload) => fail(format!("unexpected failure: {}", panic_message(&*payload))),
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let fields = parse_fields(&cli.fields[..FIELD_NAMES.len()])?;
    let timestamp = civil_from_fields(fields)?;

    let config = OracleConfig::new(&cli.ephe_path, &cli.spk);
    let oracle = JplOracle::open(&config)?;
    let report = compute_report(&oracle, &timestamp)?;
    Ok(report.render(cli.detail))
}

fn parse_fields(raw: &[String]) -> Result<[i64; 6], CliError> {
    let mut out = [0i64; 6];
    for ((slot, value), name) in out.iter_mut().zip(raw).zip(FIELD_NAMES) {
        *slot = value.trim().parse().map_err(|_| CliError::InvalidField {
            name,
            value: value.clone(),
        })?;
    }
    Ok(out)
}

fn init_tracing(verbose: bool) -> Result<(), String> {
    let level = if verbose { "debug" } else { "error" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("CHANDRA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}

fn fail(msg: impl Display) -> ExitCode {
    eprintln!("ERROR: {msg}");
    ExitCode::from(1)
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
