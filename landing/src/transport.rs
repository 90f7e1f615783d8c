//! Browser implementations of the submission seams.

use std::time::Duration;

use gloo_net::http::Request;
use tatcg_core::form::ContactDraft;
use tatcg_core::submission::{ContactTransport, Delay, DeliveryResponse, DispatchError};

/// POSTs the draft as JSON with `fetch`.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactTransport for FetchTransport {
    async fn deliver(&self, payload: &ContactDraft) -> Result<DeliveryResponse, DispatchError> {
        let request = Request::post(&self.endpoint)
            .json(payload)
            .map_err(|e| DispatchError::Interrupted(e.to_string()))?;

        match request.send().await {
            Ok(response) => Ok(DeliveryResponse::new(response.status())),
            // fetch rejects with a TypeError when nothing answers.
            Err(gloo_net::Error::JsError(e)) => Err(DispatchError::Unreachable(e.to_string())),
            Err(e) => Err(DispatchError::Interrupted(e.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
