//! Tumaninah CLI: run headless sessions and print configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tumaninah::{logging, parse_steps, run_session, ShellConfig, ShellError};

#[derive(Parser)]
#[command(name = "tumaninah")]
#[command(about = "Tab-switching shell of the Tumaninah companion app")]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless session and print a frame per step
    Run {
        /// Config file (default: XDG config path, then built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Steps to apply: tab:<id>, card:morning|evening, wait:<ms>
        #[arg(short, long, num_args = 1..)]
        script: Vec<String>,

        /// Print frames as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Print the default configuration
    Config,
}

fn run(cli: Cli) -> Result<(), ShellError> {
    match cli.command {
        Commands::Run {
            config,
            script,
            yaml,
        } => {
            let config = ShellConfig::load(config.as_deref())?;
            let steps = parse_steps(&script)?;
            let frames = run_session(&config, &steps);
            if yaml {
                let out = serde_yaml_ng::to_string(&frames).map_err(ShellError::Output)?;
                print!("{out}");
            } else {
                for frame in &frames {
                    println!("{frame}");
                }
            }
        }
        Commands::Config => print!("{}", ShellConfig::default_yaml()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("warning: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
