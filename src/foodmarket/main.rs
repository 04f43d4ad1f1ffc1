use clap::Parser;
use foodmarket::catalog;
use foodmarket::config::MarketConfig;
use foodmarket::error::Result;
use foodmarket::order_log::OrderLog;
use foodmarket::session::{Outcome, Session};
use std::io;
use std::sync::PoisonError;

mod args;
mod print;
use args::{Cli, Commands};

/// Errors go to stderr, but the exit status stays 0: a failed order is
/// reported in text, never through the exit code.
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => MarketConfig::load(path)?,
        None => MarketConfig::default(),
    };
    config.summary |= cli.summary;

    match cli.command.unwrap_or(Commands::Order) {
        Commands::Order => handle_order(&config),
        Commands::Menu => handle_menu(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn handle_order(config: &MarketConfig) -> Result<()> {
    let mut log = OrderLog::instance()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let outcome = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), config.clone());
        session.run(&mut log)?
    };

    match &outcome {
        Outcome::Ordered { logged, .. } => {
            log::info!("order complete, logged: {}", logged)
        }
        Outcome::Aborted { message } => log::info!("no order placed: {}", message),
    }

    if config.summary {
        print::print_summary(&log, config);
    }
    Ok(())
}

fn handle_menu(config: &MarketConfig) -> Result<()> {
    print::print_menu(&catalog::menu_entries(), config);
    Ok(())
}
