//! Hearth command-line entry point.
//!
//! Loads the layered settings once and routes `<category> <command> [args]`
//! to the registered CLI commands.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use hearth::{
    cli::{CliService, Session, formatting::format_error},
    config::{PathContext, loading::SourceFiles},
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Inspect layered desktop settings and keybindings")]
struct Cli {
    /// Configuration root to read sources from instead of the XDG default
    #[arg(long)]
    config_home: Option<PathBuf>,

    /// Main configuration document to use instead of discovering config.yml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log to stdout at info level instead of stderr warnings
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to the rotating log file
    #[arg(long, conflicts_with = "verbose")]
    log_file: bool,

    /// Command category (config, keys, commands)
    category: Option<String>,

    /// Command within the category
    command: Option<String>,

    /// Command arguments
    args: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.log_file {
        tracing_config::init_with_file()?;
    } else if cli.verbose {
        tracing_config::init()?;
    } else {
        tracing_config::init_cli_mode()?;
    }

    let ctx = path_context(cli.config_home.clone())?;
    debug!(config_home = %ctx.config_home().display(), "Resolved configuration root");

    let files = SourceFiles {
        config: cli.config.clone(),
        ..SourceFiles::default()
    };

    let session = match Session::load(&ctx, files) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}: {}", format_error("Error"), e);
            process::exit(1);
        }
    };
    let cli_service = CliService::new(session);

    let Some(category) = cli.category.as_deref() else {
        println!("{}", cli_service.help());
        return Ok(());
    };
    let command = cli.command.as_deref().unwrap_or("");

    match cli_service.execute_command(category, command, &cli.args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", format_error("Error"), e);
            process::exit(1);
        }
    }
}

fn path_context(config_home: Option<PathBuf>) -> Result<PathContext, Box<dyn Error>> {
    let env_ctx = PathContext::from_env()?;

    Ok(match config_home {
        Some(config_home) => PathContext::new(env_ctx.home(), config_home),
        None => env_ctx,
    })
}
