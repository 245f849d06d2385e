use fxbook_core::{
    parse_limit, Currency, Order, OrderGateway, OrderType, PairUniverse, ValidityDate,
};
use time::Date;

use crate::error::CommandError;

const USAGE: &str = "Usage: new [buy|sell] <investment ccy> <counter ccy> <limit> <validity>";

/// Create an order. All six tokens are validated in sequence before any
/// network call; only a fully valid order reaches the gateway.
pub async fn run(
    tokens: &[&str],
    gateway: &dyn OrderGateway,
    pairs: &PairUniverse,
    today: Date,
) -> Result<String, CommandError> {
    if tokens.len() != 6 {
        return Err(CommandError::Usage(USAGE));
    }

    let order_type = OrderType::parse(tokens[1])?;
    let investment_ccy = Currency::parse(tokens[2])?;
    let counter_ccy = Currency::parse(tokens[3])?;
    let pair = pairs.validate(investment_ccy, counter_ccy)?;
    let limit = parse_limit(tokens[4])?;
    let validity = ValidityDate::parse_not_past(tokens[5], today)?;

    let order = Order::new(order_type, pair, limit, validity);
    let created = gateway
        .create_order(&order)
        .await
        .map_err(|error| CommandError::CreateOrder {
            detail: error.to_string(),
        })?;

    Ok(format!("Order created: {}", created.id))
}
