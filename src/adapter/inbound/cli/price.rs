//! Handler for the `price` command.

use serde_json::json;

use super::bootstrap;
use super::command::PriceArgs;
use super::output;
use crate::error::Result;

/// Execute `price <SYMBOL>`.
pub async fn execute(args: &PriceArgs) -> Result<()> {
    let config = bootstrap::load_config(&args.source, None)?;
    let board = bootstrap::board(&config)?;
    let resolved = board.latest_price(&args.symbol).await?;

    if output::is_json() {
        return output::data(
            "price",
            &json!({
                "symbol": args.symbol,
                "price": resolved.price,
                "updated_at": resolved.observed_at,
            }),
        );
    }

    output::section(&args.symbol);
    output::field("Price", format!("${}", resolved.price.normalize()));
    output::field(
        "Updated",
        resolved.observed_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    if resolved.price <= rust_decimal::Decimal::ZERO {
        output::warning("latest price is not positive; token is hidden from `tokens`");
    }
    Ok(())
}
