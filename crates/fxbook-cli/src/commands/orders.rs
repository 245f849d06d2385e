use fxbook_core::{analytics, OrderGateway};

use crate::error::CommandError;

/// Render all open orders with their distance to the market, sorted by
/// currency pair and then by distance.
pub async fn run(gateway: &dyn OrderGateway) -> Result<String, CommandError> {
    let orders = gateway.orders().await?;
    let rates = gateway.rates().await?;

    if orders.is_empty() {
        return Ok(String::from("No orders to display"));
    }

    let mut lines = vec![
        format!(
            "{:<4} {:<4} {:<4} {:<4} {:>8} {:>12} {:>8}",
            "ID", "TYPE", "INV", "CTR", "LIMIT", "VALIDITY", "DISTANCE"
        ),
        "-".repeat(53),
    ];
    for row in analytics::distances(&orders, &rates) {
        let order = &row.order;
        let validity = order
            .valid_until
            .map_or_else(|| String::from("N/A"), |date| date.to_string());
        lines.push(format!(
            "{:<4} {:<4} {:<4} {:<4} {:>8.2} {:>12} {:>8.3}",
            order.id,
            order.order_type(),
            order.investment_ccy,
            order.counter_ccy,
            order.limit,
            validity,
            row.distance
        ));
    }

    Ok(lines.join("\n"))
}
