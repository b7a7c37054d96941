use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather history HTTP API")]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Path to the JSON file holding the search history.
    #[arg(long, default_value = "db/search_history.json")]
    pub history_file: PathBuf,
}
