//! Typed interface to the remote order service.
//!
//! One trait method per round trip; no caching and no retries -- a failed
//! call surfaces immediately as a [`GatewayError`].

mod http;

use std::future::Future;
use std::pin::Pin;

use crate::domain::{FxRate, Order};
use crate::error::GatewayError;

pub use http::HttpOrderGateway;

/// Request paths of the order service contract.
pub mod paths {
    pub const CREATE_ORDER: &str = "/createOrder";
    pub const CANCEL_ORDER: &str = "/cancelOrder";
    pub const RETRIEVE_ORDERS: &str = "/retrieveOrders";
    pub const RATE_SNAPSHOT: &str = "/rateSnapshot";
}

/// Remote order service contract.
pub trait OrderGateway: Send + Sync {
    /// Submit an order; the response carries the server-assigned id.
    fn create_order<'a>(
        &'a self,
        order: &'a Order,
    ) -> Pin<Box<dyn Future<Output = Result<Order, GatewayError>> + Send + 'a>>;

    /// Cancel by id. `Ok(false)` means the order was not found, which is not
    /// an error.
    fn cancel_order<'a>(
        &'a self,
        order_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, GatewayError>> + Send + 'a>>;

    /// Fetch the full current order set; may be empty.
    fn orders<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Order>, GatewayError>> + Send + 'a>>;

    /// Fetch the current rate snapshot; may be empty.
    fn rates<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FxRate>, GatewayError>> + Send + 'a>>;
}
