use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::{Currency, CurrencyPair, OrderType, ValidityDate};

/// Limit order as carried on the wire.
///
/// The id is assigned by the service; a client-built order carries an empty
/// placeholder until the create response returns the authoritative one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub investment_ccy: Currency,
    pub buy: bool,
    pub counter_ccy: Currency,
    pub limit: f64,
    #[serde(default)]
    pub valid_until: Option<ValidityDate>,
}

impl Order {
    /// Build an order for submission. `pair.ccy1` is the investment currency.
    pub fn new(
        order_type: OrderType,
        pair: CurrencyPair,
        limit: f64,
        valid_until: ValidityDate,
    ) -> Self {
        Self {
            id: String::new(),
            investment_ccy: pair.ccy1,
            buy: order_type.is_buy(),
            counter_ccy: pair.ccy2,
            limit,
            valid_until: Some(valid_until),
        }
    }

    pub const fn order_type(&self) -> OrderType {
        OrderType::from_buy(self.buy)
    }

    /// Concatenated-code key of the order's pair ("EURUSD").
    pub fn pair_key(&self) -> String {
        format!("{}{}", self.investment_ccy.code(), self.counter_ccy.code())
    }

    /// Same key with the currencies swapped ("USDEUR").
    pub fn reverse_pair_key(&self) -> String {
        format!("{}{}", self.counter_ccy.code(), self.investment_ccy.code())
    }
}

/// Bid/ask snapshot for one currency pair. Ask >= bid is expected from the
/// service but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRate {
    pub ccy_pair: CurrencyPair,
    pub bid: f64,
    pub ask: f64,
}

/// Parse a strictly positive limit price.
pub fn parse_limit(input: &str) -> Result<f64, ValidationError> {
    let limit: f64 = input
        .parse()
        .map_err(|_| ValidationError::InvalidLimitFormat {
            value: input.to_owned(),
        })?;
    if !limit.is_finite() {
        return Err(ValidationError::InvalidLimitFormat {
            value: input.to_owned(),
        });
    }
    if limit <= 0.0 {
        return Err(ValidationError::NonPositiveLimit);
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            OrderType::Buy,
            CurrencyPair::new(Currency::EUR, Currency::USD),
            1.2345,
            ValidityDate::parse("31.12.2030").unwrap(),
        )
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["investmentCcy"], "EUR");
        assert_eq!(json["counterCcy"], "USD");
        assert_eq!(json["buy"], true);
        assert_eq!(json["limit"], 1.2345);
        assert_eq!(json["validUntil"], "31.12.2030");
    }

    #[test]
    fn deserializes_order_without_id_or_validity() {
        let order: Order = serde_json::from_str(
            r#"{"investmentCcy":"USD","buy":false,"counterCcy":"JPY","limit":151.2}"#,
        )
        .unwrap();
        assert_eq!(order.id, "");
        assert_eq!(order.valid_until, None);
        assert_eq!(order.order_type(), OrderType::Sell);
        assert_eq!(order.pair_key(), "USDJPY");
        assert_eq!(order.reverse_pair_key(), "JPYUSD");
    }

    #[test]
    fn deserializes_rate_payload() {
        let rate: FxRate = serde_json::from_str(
            r#"{"ccyPair":{"ccy1":"EUR","ccy2":"USD"},"bid":1.19,"ask":1.22}"#,
        )
        .unwrap();
        assert_eq!(rate.ccy_pair.key(), "EURUSD");
        assert_eq!(rate.ask, 1.22);
    }

    #[test]
    fn parses_limits() {
        assert_eq!(parse_limit("1.14").unwrap(), 1.14);
        assert!(matches!(
            parse_limit("abc"),
            Err(ValidationError::InvalidLimitFormat { .. })
        ));
        assert!(matches!(
            parse_limit("NaN"),
            Err(ValidationError::InvalidLimitFormat { .. })
        ));
        assert_eq!(parse_limit("0").unwrap_err(), ValidationError::NonPositiveLimit);
        assert_eq!(
            parse_limit("-1.5").unwrap_err(),
            ValidationError::NonPositiveLimit
        );
    }
}
