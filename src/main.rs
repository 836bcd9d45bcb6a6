use clap::Parser;

use tokenboard::adapter::inbound::cli::command::Cli;
use tokenboard::adapter::inbound::cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), &cli.color);

    if let Err(e) = tokenboard::adapter::inbound::cli::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
