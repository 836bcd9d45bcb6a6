//! CLI module graph and command dispatch.

pub mod balances;
pub mod bootstrap;
pub mod command;
pub mod config;
pub mod output;
pub mod price;
pub mod tokens;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Balances(args) => balances::execute(&args).await,
        Commands::Tokens(args) => tokens::execute(&args).await,
        Commands::Price(args) => price::execute(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
