//! Domain types for the FX order book: currencies, pairs, orders, and rates.
//!
//! All parsing here is client-side validation that runs before any network
//! call; every failure is a [`ValidationError`](crate::ValidationError) with
//! a message fit for direct display.

mod currency;
mod order;
mod pair;
mod validity;

pub use currency::{Currency, OrderType};
pub use order::{parse_limit, FxRate, Order};
pub use pair::{CurrencyPair, PairUniverse};
pub use validity::ValidityDate;
