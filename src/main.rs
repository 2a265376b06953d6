use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rxlookup::ServerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config file)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Address to bind to (overrides config file)
    #[arg(long, env = "RXLOOKUP_HOST")]
    host: Option<String>,

    /// Speech program for /speak (overrides config file)
    #[arg(long, env = "RXLOOKUP_SPEECH_COMMAND")]
    speech_command: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => ServerConfig::load_from(&path)?,
        None => ServerConfig::default(),
    };

    // Apply CLI/env overrides
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(speech_command) = args.speech_command {
        config.speech_command = Some(speech_command);
    }

    rxlookup::run_server(config).await
}
