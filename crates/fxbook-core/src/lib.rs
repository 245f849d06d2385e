//! # fxbook-core
//!
//! Domain contracts for the fxbook FX order book client.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Currencies, pairs, orders, rates, and their validation |
//! | [`analytics`] | Distance-to-market and order summarization |
//! | [`gateway`] | Order service contract and its HTTP implementation |
//! | [`http`] | Transport abstraction (reqwest or scripted doubles) |
//! | [`error`] | Validation and gateway error types |
//!
//! The crate holds no durable state: every gateway call is a single
//! request/response round trip, and all validation happens client-side
//! before the network is touched.

pub mod analytics;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod http;

pub use analytics::{distances, summarize, OrderDistance, SummaryKey, SummaryRow};
pub use domain::{
    parse_limit, Currency, CurrencyPair, FxRate, Order, OrderType, PairUniverse, ValidityDate,
};
pub use error::{GatewayError, GatewayOp, ValidationError};
pub use gateway::{HttpOrderGateway, OrderGateway};
pub use http::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
