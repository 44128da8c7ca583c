// This is my main entry point for the checking-ledger CLI application
// I'm importing the session, the shell and the settings I built for the bank
use checking_ledger::{Command, Config, Opt, Session, Shell};
use clap::Parser;
use log::{error, info};
use std::io;
use std::process;

fn main() {
    // I parse the command line arguments using clap - this gives me a nice CLI interface
    let opt = Opt::parse();

    // I need the settings before logging starts, because the log level lives in them
    // The file and BANK_* variables are read first, my flags go on top, then I validate once
    let config = match opt.load_config() {
        Ok(config) => config,
        Err(e) => {
            // Logging isn't up yet, so I report straight to stderr
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // I initialize logging so I can see what's happening in the bank
    // Logs go to stderr so they never mix with the menu on stdout, and RUST_LOG still wins
    let level = config.log_level_filter().unwrap_or(log::LevelFilter::Warn);
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    // I run the actual command and handle any errors that might occur
    // If something goes wrong, I log the error and exit with code 1
    if let Err(e) = run_command(opt.command(), config) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle the different CLI commands
fn run_command(command: Command, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // When I want to use the bank, I start the interactive menu (this is the default)
        Command::Run => {
            info!(
                "Starting session: branch {}, withdrawal limit {}, {} withdrawals per account",
                config.branch_code, config.withdrawal_value_limit, config.withdrawal_count_limit
            );
            // Every run gets a fresh session - nothing survives after I quit
            let session = Session::new(&config);
            // I hand the shell my terminal's stdin and stdout
            let stdin = io::stdin();
            let mut shell = Shell::new(session, stdin.lock(), io::stdout());
            // The shell only comes back with an error if reading or writing the terminal failed
            shell.run()?;
        }
        // When I want to check which settings are actually in effect
        Command::ShowConfig => {
            // I print them as TOML so the output can be saved and passed back with --config
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
