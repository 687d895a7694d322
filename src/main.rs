use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

use practica::LogLevel;
use practica::core::catalog::Catalog;
use practica::core::config::{self, PracticaConfig, ResolvedConfig};
use practica::core::dispatch::{Dispatcher, Outcome};
use practica::core::exercise::{ExerciseId, RawInputs};
use practica::core::messages::Locale;
use practica::tui;

#[derive(Parser)]
#[command(name = "practica", about = "Four small programming exercises in the terminal")]
struct Args {
    /// Message language (overrides PRACTICA_LOCALE and the config file)
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Config file to use instead of ~/.practica/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "practica.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one exercise without the terminal UI
    Run {
        #[arg(value_enum, ignore_case = true)]
        exercise: ExerciseId,
        /// Field values in card order (e.g. `run primes 10 20`)
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print the solution for an exercise
    Solution {
        #[arg(value_enum, ignore_case = true)]
        exercise: ExerciseId,
    },
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    info!("Practica starting up");

    let config = resolve_config(&args);
    info!("Resolved config: {:?}", config);

    match args.command {
        None => {
            tui::run(config)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Run { exercise, values }) => {
            let inputs = RawInputs::from_positional(exercise, &values);
            let dispatcher = Dispatcher::new(config.locale, config.limits);
            match dispatcher.dispatch(exercise, &inputs) {
                Outcome::Success(text) => {
                    println!("{}", text);
                    Ok(ExitCode::SUCCESS)
                }
                Outcome::Error(text) => {
                    eprintln!("{}", text);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Some(Command::Solution { exercise }) => {
            let catalog = Catalog::builtin(config.locale);
            match catalog.get(exercise) {
                Some(entry) => {
                    println!("{}\n\n{}\n\n{}", entry.title, entry.source.trim_end(), entry.explanation);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    warn!("No solution entry for {}", exercise);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Defaults → config file → env → CLI. A broken config file never stops startup.
fn resolve_config(args: &Args) -> ResolvedConfig {
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        PracticaConfig::default()
    });
    config::resolve(&file_config, args.locale)
}
