//! repo-hygiene command-line entry point
//!
//! Usage: repo-hygiene <start_dir> [functions]
//!
//! Runs the copyright header check, or the forbidden-function check when the
//! second argument is exactly `functions`. Further positional arguments are
//! ignored; unknown `-` flags are usage errors. Exits 0 when every file
//! passes, 1 when any file fails, 2 on usage errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use repo_hygiene::report::{self, ConsoleListener};
use repo_hygiene::{logging, utils, CheckKind, NullListener, ScanConfig, UnreadablePolicy};

const EXIT_VIOLATIONS: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Check a source tree for missing copyright headers or forbidden functions
#[derive(Parser, Debug)]
#[command(name = "repo-hygiene")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan
    #[arg(value_name = "START_DIR")]
    start_dir: Option<PathBuf>,

    /// `functions` runs the forbidden-function check; anything else checks headers
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// Further positional arguments are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    extra: Vec<String>,

    /// How files that cannot be read as text are treated
    #[arg(long, value_enum, default_value_t = UnreadableArg::Report)]
    unreadable: UnreadableArg,

    /// Print the scan report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the result lines
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnreadableArg {
    Report,
    Violation,
    Ignore,
}

impl From<UnreadableArg> for UnreadablePolicy {
    fn from(arg: UnreadableArg) -> Self {
        match arg {
            UnreadableArg::Report => UnreadablePolicy::Report,
            UnreadableArg::Violation => UnreadablePolicy::Violation,
            UnreadableArg::Ignore => UnreadablePolicy::Ignore,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run() -> Result<ExitCode> {
    // Load .env so REPO_HYGIENE_LOG can be set there
    utils::load_env().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let Some(start_dir) = cli.start_dir else {
        println!("{}", report::MISSING_START_DIR);
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    if !cli.extra.is_empty() {
        tracing::debug!(ignored = ?cli.extra, "Ignoring extra arguments");
    }

    let check = CheckKind::from_mode_arg(cli.mode.as_deref());
    let policy = UnreadablePolicy::from(cli.unreadable);
    let config = ScanConfig::default();

    let scan_report = if cli.json {
        repo_hygiene::run_check(check, &start_dir, &config, &mut NullListener)
            .with_context(|| format!("Failed to scan {}", start_dir.display()))?
    } else {
        let mut stdout = io::stdout();
        report::write_start(&mut stdout, &start_dir.to_string_lossy(), check)?;

        let mut listener = ConsoleListener::new(io::stdout(), cli.quiet);
        repo_hygiene::run_check(check, &start_dir, &config, &mut listener)
            .with_context(|| format!("Failed to scan {}", start_dir.display()))?
    };

    if cli.json {
        report::write_json(&mut io::stdout(), &scan_report)?;
    } else {
        report::write_result(&mut io::stdout(), &scan_report, policy)?;
    }

    if scan_report.is_success(policy) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_VIOLATIONS))
    }
}
