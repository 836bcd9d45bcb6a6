//! Handler for the `balances` command.

use tabled::{settings::Style, Table, Tabled};

use super::bootstrap;
use super::command::BalancesArgs;
use super::output;
use crate::application::Ranking;
use crate::domain::{DisplayRow, UsdValue};
use crate::error::Result;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "USD Value")]
    usd_value: String,
}

impl BalanceRow {
    fn new(rank: usize, row: &DisplayRow) -> Self {
        Self {
            rank,
            currency: row.currency.to_string(),
            chain: row.chain.to_string(),
            amount: row.formatted_amount.clone(),
            usd_value: usd(row.usd_value),
        }
    }
}

/// Execute `balances`.
pub async fn execute(args: &BalancesArgs) -> Result<()> {
    let config = bootstrap::load_config(&args.source, args.balances.as_deref())?;
    let board = bootstrap::board(&config)?;
    let ranking = board.rank().await?;
    render(&ranking)
}

fn render(ranking: &Ranking) -> Result<()> {
    if output::is_json() {
        return output::data("balances", ranking);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Balances");
    if ranking.is_empty() {
        output::empty("No assets found.");
        return Ok(());
    }

    output::table(&render_table(&ranking.rows));
    output::field("Total", usd(ranking.total_usd_value));
    if ranking.filtered_out > 0 {
        output::note(&format!(
            "{} row(s) hidden: unknown chain or zero balance",
            ranking.filtered_out
        ));
    }
    Ok(())
}

fn usd(value: UsdValue) -> String {
    format!("${:.2}", value.round_dp(2))
}

fn render_table(rows: &[DisplayRow]) -> String {
    let rows: Vec<BalanceRow> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| BalanceRow::new(i + 1, row))
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
