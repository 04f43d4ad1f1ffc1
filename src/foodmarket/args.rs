use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// `--version` text. Untagged or dirty builds carry the short commit hash,
/// e.g. `0.1.0@1a2b3c4`.
fn version() -> &'static str {
    static TEXT: OnceLock<String> = OnceLock::new();

    TEXT.get_or_init(|| {
        let hash = env!("GIT_HASH");
        match (env!("IS_RELEASE"), hash) {
            ("true", _) | (_, "") => env!("CARGO_PKG_VERSION").to_string(),
            (_, hash) => format!("{}@{}", env!("CARGO_PKG_VERSION"), hash),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "foodmarket", version = version())]
#[command(about = "Order a pizza or a burger from the console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the order log after ordering
    #[arg(long, global = true)]
    pub summary: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Place an order interactively (default)
    Order,

    /// Show every menu choice with its price
    #[command(alias = "ls")]
    Menu,
}
