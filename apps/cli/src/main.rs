use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

mod commands;

use commands::config::ConfigCommands;
use commands::process::ProcessArgs;
use commands::template::TemplateArgs;

#[derive(Parser)]
#[command(name = "rvmat-creator")]
#[command(about = "Generate damaged and templated DayZ .rvmat materials", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate _worn/_damage/_destruct variants for files and directories
    Process(ProcessArgs),
    /// Create a new .rvmat from a template, then its damage variants
    Template(TemplateArgs),
    /// Show or change saved settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Process(args) => commands::process::handle(args),
        Commands::Template(args) => commands::template::handle(args),
        Commands::Config(cmd) => commands::config::handle(cmd),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
