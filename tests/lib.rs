//! Shared test support: a scripted HTTP transport for offline gateway tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

pub use fxbook_core::{
    gateway::paths, Currency, CurrencyPair, FxRate, GatewayError, HttpClient, HttpError,
    HttpOrderGateway, HttpRequest, HttpResponse, Order, OrderGateway, OrderType, PairUniverse,
    ValidationError, ValidityDate,
};

/// Transport double answering by URL suffix and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    responses: HashMap<String, HttpResponse>,
    transport_failure: Option<String>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_owned(),
            HttpResponse {
                status,
                body: body.to_owned(),
            },
        );
        self
    }

    pub fn fail_transport(mut self, detail: &str) -> Self {
        self.transport_failure = Some(detail.to_owned());
        self
    }

    pub fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());

            if let Some(detail) = &self.transport_failure {
                return Err(HttpError::new(detail.clone()));
            }

            let response = self
                .responses
                .iter()
                .find(|(path, _)| request.url.ends_with(path.as_str()))
                .map(|(_, response)| response.clone())
                .unwrap_or(HttpResponse {
                    status: 404,
                    body: String::from("no scripted response"),
                });
            Ok(response)
        })
    }
}
