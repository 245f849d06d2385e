//! Client-side order analytics: distance to market and grouped summaries.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::domain::{Currency, FxRate, Order, OrderType};

/// An order annotated with its distance to the best-matching market rate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDistance {
    pub order: Order,
    pub distance: f64,
}

/// Compute |ask - limit| per order against the rate snapshot and sort by
/// (pair key, distance), both ascending.
///
/// The rate for a pair is looked up by concatenated codes, falling back to
/// the reversed pair. An order with no rate at all keeps distance 0.0 -- the
/// behavior the service's original client documented, even though it is
/// indistinguishable from a genuinely at-market order.
pub fn distances(orders: &[Order], rates: &[FxRate]) -> Vec<OrderDistance> {
    let by_key: HashMap<String, &FxRate> = rates
        .iter()
        .map(|rate| (rate.ccy_pair.key(), rate))
        .collect();

    let mut rows: Vec<OrderDistance> = orders
        .iter()
        .map(|order| OrderDistance {
            distance: rate_distance(order, &by_key),
            order: order.clone(),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.order
            .pair_key()
            .cmp(&b.order.pair_key())
            .then_with(|| a.distance.total_cmp(&b.distance))
    });
    rows
}

fn rate_distance(order: &Order, by_key: &HashMap<String, &FxRate>) -> f64 {
    by_key
        .get(&order.pair_key())
        .or_else(|| by_key.get(&order.reverse_pair_key()))
        .map_or(0.0, |rate| (rate.ask - order.limit).abs())
}

/// Grouping key for the summary view.
///
/// Ordered by investment currency, then counter currency, then type -- type
/// is the last tiebreak even though it is the first display column. Currency
/// comparison is by code so the rendering order is alphabetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummaryKey {
    pub order_type: OrderType,
    pub investment_ccy: Currency,
    pub counter_ccy: Currency,
}

impl Ord for SummaryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.investment_ccy
            .code()
            .cmp(other.investment_ccy.code())
            .then_with(|| self.counter_ccy.code().cmp(other.counter_ccy.code()))
            .then_with(|| self.order_type.label().cmp(other.order_type.label()))
    }
}

impl PartialOrd for SummaryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-group statistics for the summary view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub count: usize,
    pub average_limit: f64,
}

/// Group orders by (type, investment ccy, counter ccy) with count and mean
/// limit per group, keyed deterministically for rendering.
pub fn summarize(orders: &[Order]) -> BTreeMap<SummaryKey, SummaryRow> {
    let mut sums: BTreeMap<SummaryKey, (usize, f64)> = BTreeMap::new();
    for order in orders {
        let key = SummaryKey {
            order_type: order.order_type(),
            investment_ccy: order.investment_ccy,
            counter_ccy: order.counter_ccy,
        };
        let entry = sums.entry(key).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += order.limit;
    }

    sums.into_iter()
        .map(|(key, (count, sum))| {
            (
                key,
                SummaryRow {
                    count,
                    average_limit: sum / count as f64,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::{CurrencyPair, ValidityDate};

    use super::*;

    fn order(order_type: OrderType, ccy1: Currency, ccy2: Currency, limit: f64) -> Order {
        Order::new(
            order_type,
            CurrencyPair::new(ccy1, ccy2),
            limit,
            ValidityDate::parse("31.12.2030").unwrap(),
        )
    }

    fn rate(ccy1: Currency, ccy2: Currency, bid: f64, ask: f64) -> FxRate {
        FxRate {
            ccy_pair: CurrencyPair::new(ccy1, ccy2),
            bid,
            ask,
        }
    }

    #[test]
    fn distance_is_abs_ask_minus_limit_sorted_ascending() {
        let orders = vec![
            order(OrderType::Buy, Currency::EUR, Currency::USD, 1.25),
            order(OrderType::Buy, Currency::EUR, Currency::USD, 1.20),
        ];
        let rates = vec![rate(Currency::EUR, Currency::USD, 1.19, 1.22)];

        let rows = distances(&orders, &rates);
        assert_eq!(rows.len(), 2);
        assert!((rows[0].distance - 0.02).abs() < 1e-9);
        assert!((rows[1].distance - 0.03).abs() < 1e-9);
        assert_eq!(rows[0].order.limit, 1.20);
    }

    #[test]
    fn falls_back_to_reversed_pair_rate() {
        let orders = vec![order(OrderType::Sell, Currency::USD, Currency::EUR, 1.00)];
        let rates = vec![rate(Currency::EUR, Currency::USD, 1.19, 1.22)];

        let rows = distances(&orders, &rates);
        assert!((rows[0].distance - 0.22).abs() < 1e-9);
    }

    #[test]
    fn missing_rate_yields_zero_distance() {
        let orders = vec![order(OrderType::Buy, Currency::USD, Currency::JPY, 151.0)];
        let rows = distances(&orders, &[]);
        assert_eq!(rows[0].distance, 0.0);
    }

    #[test]
    fn sorts_by_pair_key_before_distance() {
        let orders = vec![
            order(OrderType::Buy, Currency::USD, Currency::JPY, 151.0),
            order(OrderType::Buy, Currency::EUR, Currency::USD, 1.30),
        ];
        let rates = vec![rate(Currency::EUR, Currency::USD, 1.19, 1.22)];

        let rows = distances(&orders, &rates);
        // EURUSD sorts before USDJPY despite the larger distance.
        assert_eq!(rows[0].order.pair_key(), "EURUSD");
        assert_eq!(rows[1].order.pair_key(), "USDJPY");
    }

    #[test]
    fn summary_groups_count_and_average() {
        let orders = vec![
            order(OrderType::Buy, Currency::EUR, Currency::USD, 1.10),
            order(OrderType::Buy, Currency::EUR, Currency::USD, 1.20),
            order(OrderType::Sell, Currency::EUR, Currency::USD, 1.50),
        ];

        let groups = summarize(&orders);
        assert_eq!(groups.len(), 2);

        let buy = groups
            .get(&SummaryKey {
                order_type: OrderType::Buy,
                investment_ccy: Currency::EUR,
                counter_ccy: Currency::USD,
            })
            .unwrap();
        assert_eq!(buy.count, 2);
        assert!((buy.average_limit - 1.15).abs() < 1e-9);
    }

    #[test]
    fn summary_key_order_uses_type_as_last_tiebreak() {
        let sell_eur = SummaryKey {
            order_type: OrderType::Sell,
            investment_ccy: Currency::EUR,
            counter_ccy: Currency::USD,
        };
        let buy_eur = SummaryKey {
            order_type: OrderType::Buy,
            investment_ccy: Currency::EUR,
            counter_ccy: Currency::USD,
        };
        let buy_chf = SummaryKey {
            order_type: OrderType::Buy,
            investment_ccy: Currency::CHF,
            counter_ccy: Currency::USD,
        };

        assert!(buy_eur < sell_eur);
        // Alphabetic currency order, not enum declaration order.
        assert!(buy_chf < buy_eur);
    }
}
