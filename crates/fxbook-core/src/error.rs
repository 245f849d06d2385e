use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Client-side validation errors raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid currency: {value}. Supported currencies: {supported}")]
    InvalidCurrency { value: String, supported: String },

    #[error("Order type must be 'buy' or 'sell'")]
    InvalidOrderType,

    #[error("Investment and counter currency cannot be the same: {ccy}")]
    SameCurrency { ccy: String },

    #[error("Unsupported currency pair: {pair}. Supported pairs: {supported}")]
    UnsupportedPair { pair: String, supported: String },

    #[error("Invalid limit format: {value}")]
    InvalidLimitFormat { value: String },

    #[error("Limit must be greater than zero")]
    NonPositiveLimit,

    #[error("Invalid date format: {value}. Expected: dd.MM.yyyy")]
    InvalidDateFormat { value: String },

    #[error("Validity date must be in the future")]
    PastValidityDate,
}

/// Gateway operation, used to attach context to remote failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    CreateOrder,
    CancelOrder,
    GetOrders,
    GetRates,
}

impl GatewayOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateOrder => "create order",
            Self::CancelOrder => "cancel order",
            Self::GetOrders => "get orders",
            Self::GetRates => "get exchange rates",
        }
    }
}

impl Display for GatewayOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote order service failures: non-200 status, transport, or bad bodies.
///
/// Every message starts with "Failed to <operation>" so the dispatcher can
/// surface it to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Failed to {op}. Status: {status}, Body: {body}")]
    Status { op: GatewayOp, status: u16, body: String },

    #[error("Failed to {op}: {detail}")]
    Transport { op: GatewayOp, detail: String },

    #[error("Failed to {op}: invalid response body: {detail}")]
    Decode { op: GatewayOp, detail: String },
}

impl GatewayError {
    pub const fn op(&self) -> GatewayOp {
        match self {
            Self::Status { op, .. } | Self::Transport { op, .. } | Self::Decode { op, .. } => *op,
        }
    }
}
