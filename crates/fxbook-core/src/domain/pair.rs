use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::Currency;

/// Ordered currency pair: investment currency first, counter currency second.
///
/// Equality is order-sensitive; EUR/USD and USD/EUR are distinct pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub ccy1: Currency,
    pub ccy2: Currency,
}

impl CurrencyPair {
    pub const fn new(ccy1: Currency, ccy2: Currency) -> Self {
        Self { ccy1, ccy2 }
    }

    pub const fn reversed(self) -> Self {
        Self {
            ccy1: self.ccy2,
            ccy2: self.ccy1,
        }
    }

    /// Concatenated-code key used for rate lookups ("EURUSD").
    pub fn key(self) -> String {
        format!("{}{}", self.ccy1.code(), self.ccy2.code())
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ccy1, self.ccy2)
    }
}

/// The set of currency pairs the remote service accepts orders for.
///
/// Kept as an injectable value rather than a hardcoded constant so it can be
/// swapped for a snapshot fetched from the service at startup.
#[derive(Debug, Clone)]
pub struct PairUniverse {
    pairs: Vec<CurrencyPair>,
}

impl Default for PairUniverse {
    fn default() -> Self {
        use Currency::*;
        Self::new([
            CurrencyPair::new(EUR, USD),
            CurrencyPair::new(EUR, GBP),
            CurrencyPair::new(EUR, SEK),
            CurrencyPair::new(EUR, NOK),
            CurrencyPair::new(USD, SEK),
            CurrencyPair::new(USD, NOK),
            CurrencyPair::new(USD, JPY),
            CurrencyPair::new(USD, ZAR),
            CurrencyPair::new(EUR, CHF),
            CurrencyPair::new(USD, CHF),
        ])
    }
}

impl PairUniverse {
    pub fn new(pairs: impl IntoIterator<Item = CurrencyPair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    /// Validate an investment/counter combination for order entry.
    ///
    /// The currencies must differ, and either the pair or its reverse must be
    /// in the supported set.
    pub fn validate(
        &self,
        ccy1: Currency,
        ccy2: Currency,
    ) -> Result<CurrencyPair, ValidationError> {
        if ccy1 == ccy2 {
            return Err(ValidationError::SameCurrency {
                ccy: ccy1.code().to_owned(),
            });
        }

        let pair = CurrencyPair::new(ccy1, ccy2);
        if self.pairs.contains(&pair) || self.pairs.contains(&pair.reversed()) {
            return Ok(pair);
        }

        Err(ValidationError::UnsupportedPair {
            pair: pair.to_string(),
            supported: self.describe(),
        })
    }

    fn describe(&self) -> String {
        self.pairs
            .iter()
            .map(|pair| pair.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
