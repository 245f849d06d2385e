use fxbook_core::OrderGateway;

use crate::error::CommandError;

/// Render the current rate snapshot, bid and ask at four decimals.
pub async fn run(gateway: &dyn OrderGateway) -> Result<String, CommandError> {
    let rates = gateway.rates().await?;

    if rates.is_empty() {
        return Ok(String::from("No exchange rates available"));
    }

    let mut lines = vec![
        format!("{:<8} {:<8} {:>10} {:>10}", "FROM", "TO", "BID", "ASK"),
        "-".repeat(37),
    ];
    for rate in &rates {
        lines.push(format!(
            "{:<8} {:<8} {:>10.4} {:>10.4}",
            rate.ccy_pair.ccy1, rate.ccy_pair.ccy2, rate.bid, rate.ask
        ));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use fxbook_core::{Currency, CurrencyPair, FxRate};

    use crate::commands::testing::StubGateway;

    use super::*;

    #[tokio::test]
    async fn empty_snapshot_prints_no_data_message() {
        let gateway = StubGateway::default();
        let out = run(&gateway).await.unwrap();
        assert_eq!(out, "No exchange rates available");
    }

    #[tokio::test]
    async fn renders_one_row_per_rate_at_four_decimals() {
        let gateway = StubGateway {
            rates: vec![
                FxRate {
                    ccy_pair: CurrencyPair::new(Currency::EUR, Currency::USD),
                    bid: 1.19,
                    ask: 1.2213,
                },
                FxRate {
                    ccy_pair: CurrencyPair::new(Currency::USD, Currency::JPY),
                    bid: 150.5,
                    ask: 151.25,
                },
            ],
            ..StubGateway::default()
        };

        let out = run(&gateway).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("FROM"));
        assert!(lines[2].contains("EUR"));
        assert!(lines[2].contains("1.1900"));
        assert!(lines[2].contains("1.2213"));
        assert!(lines[3].contains("151.2500"));
    }
}
