use fxbook_core::{analytics, OrderGateway};

use crate::error::CommandError;

/// Render order counts and average limits grouped by (type, investment ccy,
/// counter ccy), sorted by currency pair with type as the last tiebreak.
pub async fn run(gateway: &dyn OrderGateway) -> Result<String, CommandError> {
    let orders = gateway.orders().await?;

    if orders.is_empty() {
        return Ok(String::from("No orders to summarize"));
    }

    let mut lines = vec![
        format!(
            "{:<7} {:<7} {:<7} {:>4} {:>7}",
            "TYPE", "INV", "CTR", "COUNT", "AVERAGE"
        ),
        "=".repeat(36),
    ];
    for (key, row) in analytics::summarize(&orders) {
        lines.push(format!(
            "{:<7} {:<7} {:<7} {:>3} {:>7.2}",
            key.order_type, key.investment_ccy, key.counter_ccy, row.count, row.average_limit
        ));
    }

    Ok(lines.join("\n"))
}
