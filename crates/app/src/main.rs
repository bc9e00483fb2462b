mod logging;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::LevelFilter;
use services::StudyLoopService;
use thiserror::Error;
use ui::{App, UiApp, build_app_context};

use crate::logging::LogDestination;

#[derive(Debug, Error, PartialEq, Eq)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --seed value: {raw}")]
    InvalidSeed { raw: String },
    #[error("invalid --log value: {raw} (expected terminal, file, both or off)")]
    InvalidLog { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    study_loop: Arc<StudyLoopService>,
}

impl UiApp for DesktopApp {
    fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    log: LogDestination,
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--log <terminal|file|both|off>] [-v]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --seed random");
    eprintln!("  --log terminal");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCAB_SEED, VOCAB_LOG");
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_log(raw: String) -> Result<LogDestination, ArgsError> {
    raw.parse().map_err(|()| ArgsError::InvalidLog { raw })
}

impl Args {
    /// Parse flags, falling back to `env` for values not given on the command line.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut seed = env("VOCAB_SEED").map(parse_seed).transpose()?;
        let mut log = env("VOCAB_LOG")
            .map(parse_log)
            .transpose()?
            .unwrap_or(LogDestination::Terminal);
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(parse_seed(value)?);
                }
                "--log" => {
                    let value = require_value(args, "--log")?;
                    log = parse_log(value)?;
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self { seed, log, verbose }))
    }

    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let command = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match command {
        Command::Run(args) => args,
        Command::Help => {
            print_usage();
            return Ok(());
        }
    };

    logging::initialize(args.log, args.level());

    let study_loop = StudyLoopService::builtin()?.with_seed(args.seed);
    log::info!(
        "loaded {} vocabulary entries",
        study_loop.vocabulary().len()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        study_loop: Arc::new(study_loop),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vocabulary")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
