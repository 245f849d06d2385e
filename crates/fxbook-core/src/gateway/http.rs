use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::domain::{FxRate, Order};
use crate::error::{GatewayError, GatewayOp};
use crate::http::{HttpClient, HttpRequest, HttpResponse};

use super::{paths, OrderGateway};

/// HTTP implementation of [`OrderGateway`] against the order service's JSON
/// contract.
pub struct HttpOrderGateway {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl HttpOrderGateway {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout_ms: 30_000,
        }
    }

    /// Per-call timeout; connect timeouts belong to the transport.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn call(
        &self,
        op: GatewayOp,
        request: HttpRequest,
    ) -> Result<HttpResponse, GatewayError> {
        let url = request.url.clone();
        let response = self
            .http
            .execute(request.with_timeout_ms(self.timeout_ms))
            .await
            .map_err(|error| {
                tracing::warn!(%url, %error, "gateway transport failure");
                GatewayError::Transport {
                    op,
                    detail: error.to_string(),
                }
            })?;

        if response.status != 200 {
            tracing::warn!(%url, status = response.status, "gateway returned non-200");
            return Err(GatewayError::Status {
                op,
                status: response.status,
                body: response.body,
            });
        }

        tracing::debug!(%url, "gateway call ok");
        Ok(response)
    }
}

impl OrderGateway for HttpOrderGateway {
    fn create_order<'a>(
        &'a self,
        order: &'a Order,
    ) -> Pin<Box<dyn Future<Output = Result<Order, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let op = GatewayOp::CreateOrder;
            let body = serde_json::to_string(order).map_err(|e| GatewayError::Transport {
                op,
                detail: format!("could not encode request body: {e}"),
            })?;

            let request = HttpRequest::post(self.url(paths::CREATE_ORDER))
                .with_header("Content-Type", "application/json")
                .with_body(body);
            let response = self.call(op, request).await?;

            serde_json::from_str(&response.body).map_err(|e| GatewayError::Decode {
                op,
                detail: e.to_string(),
            })
        })
    }

    fn cancel_order<'a>(
        &'a self,
        order_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let op = GatewayOp::CancelOrder;
            let request = HttpRequest::post(self.url(paths::CANCEL_ORDER))
                .with_header("Content-Type", "application/json")
                .with_body(order_id.to_owned());
            let response = self.call(op, request).await?;

            match response.body.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(GatewayError::Decode {
                    op,
                    detail: format!("expected 'true' or 'false', got '{other}'"),
                }),
            }
        })
    }

    fn orders<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Order>, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let op = GatewayOp::GetOrders;
            let request = HttpRequest::get(self.url(paths::RETRIEVE_ORDERS));
            let response = self.call(op, request).await?;

            serde_json::from_str(&response.body).map_err(|e| GatewayError::Decode {
                op,
                detail: e.to_string(),
            })
        })
    }

    fn rates<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FxRate>, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let op = GatewayOp::GetRates;
            let request = HttpRequest::get(self.url(paths::RATE_SNAPSHOT));
            let response = self.call(op, request).await?;

            serde_json::from_str(&response.body).map_err(|e| GatewayError::Decode {
                op,
                detail: e.to_string(),
            })
        })
    }
}
