mod config;
mod turn_loop;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use common::{log, logger};
use config::{CONFIG_FILE, Config, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Console tic-tac-toe adjudicator")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Log to stderr regardless of config
    #[arg(long)]
    verbose: bool,

    /// Tag log lines with the configured prefix, or "Console" if none is set
    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to --config and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.logging.prefix.clone().unwrap_or_else(|| "Console".to_string()))
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, args.verbose || config.logging.enabled);
    log!("Using config {}", args.config);

    let stdin = io::stdin();
    let state = turn_loop::run(stdin.lock(), io::stdout(), &config.board)?;
    log!("Game over: {}", state);

    Ok(())
}
