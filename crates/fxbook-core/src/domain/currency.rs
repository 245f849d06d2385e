use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Closed set of currency codes accepted by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    EUR,
    USD,
    GBP,
    SEK,
    NOK,
    JPY,
    ZAR,
    CHF,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Self::EUR,
        Self::USD,
        Self::GBP,
        Self::SEK,
        Self::NOK,
        Self::JPY,
        Self::ZAR,
        Self::CHF,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::SEK => "SEK",
            Self::NOK => "NOK",
            Self::JPY => "JPY",
            Self::ZAR => "ZAR",
            Self::CHF => "CHF",
        }
    }

    /// Case-insensitive exact match; the error lists every supported code.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let upper = input.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == upper)
            .ok_or_else(|| ValidationError::InvalidCurrency {
                value: input.to_owned(),
                supported: supported_codes(),
            })
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn supported_codes() -> String {
    Currency::ALL
        .iter()
        .map(|currency| currency.code())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Side of an order: buying or selling the investment currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ValidationError::InvalidOrderType),
        }
    }

    pub const fn from_buy(buy: bool) -> Self {
        if buy {
            Self::Buy
        } else {
            Self::Sell
        }
    }

    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Lowercase label used in table output and summary grouping.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
