//! Gold Price Gateway - caching proxy for metals.dev spot prices

use clap::Parser;
use gold_price_gateway::server::builder::{RunOptions, run_server};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "gateway", version, about = "Gold price gateway for metals.dev")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Bind host, overrides the configuration file
    #[arg(long, env = "GATEWAY_HOST")]
    host: Option<String>,

    /// Bind port, overrides the configuration file
    #[arg(short, long, env = "GATEWAY_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, the key may come from the real environment
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let options = RunOptions {
        config_path: args.config,
        host: args.host,
        port: args.port,
    };

    match run_server(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
