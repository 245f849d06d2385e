use fxbook_core::OrderGateway;

use crate::error::CommandError;

const USAGE: &str = "Usage: cancel <ID>";

/// Cancel an order by id. A missing order is a normal outcome, not an error.
pub async fn run(tokens: &[&str], gateway: &dyn OrderGateway) -> Result<String, CommandError> {
    if tokens.len() != 2 {
        return Err(CommandError::Usage(USAGE));
    }

    let order_id = tokens[1];
    let cancelled = gateway
        .cancel_order(order_id)
        .await
        .map_err(|error| CommandError::CancelOrder {
            detail: error.to_string(),
        })?;

    Ok(if cancelled {
        format!("Order {order_id} cancelled successfully")
    } else {
        format!("Order {order_id} not found")
    })
}
