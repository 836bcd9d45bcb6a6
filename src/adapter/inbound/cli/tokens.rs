//! Handler for the `tokens` command.

use tabled::{settings::Style, Table, Tabled};

use super::bootstrap;
use super::command::SourceArgs;
use super::output;
use crate::domain::Token;
use crate::error::Result;

#[derive(Tabled)]
struct TokenRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price (USD)")]
    price: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            symbol: token.symbol.to_string(),
            price: token.price.normalize().to_string(),
            updated: token.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Execute `tokens`.
pub async fn execute(args: &SourceArgs) -> Result<()> {
    let config = bootstrap::load_config(args, None)?;
    let board = bootstrap::board(&config)?;
    let tokens = board.catalog().await;

    if output::is_json() {
        return output::data("tokens", &tokens);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Tokens");
    if tokens.is_empty() {
        output::empty("No tokens found.");
        return Ok(());
    }

    let rows: Vec<TokenRow> = tokens.iter().map(TokenRow::from).collect();
    output::table(&Table::new(rows).with(Style::rounded()).to_string());
    output::note(&format!("{} token(s)", tokens.len()));
    Ok(())
}
