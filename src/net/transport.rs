//! Browser `fetch` transport via `gloo-net`.
//!
//! Client-side (csr): real HTTP calls against the configured API origin.
//! Native builds: every request fails as a network error, since there is no
//! browser to talk to.

#![allow(clippy::unused_async)]

use futures::future::LocalBoxFuture;

use super::error::ApiError;
use super::gateway::{HttpRequest, HttpResponse, Transport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for BrowserTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        Box::pin(send_request(self.url(&request.path), request))
    }
}

#[cfg(feature = "csr")]
async fn send_request(url: String, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    use gloo_net::http::Request;

    use super::gateway::Method;

    let mut builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    if !request.query.is_empty() {
        builder = builder.query(request.query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let sent = match &request.body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    let authorization = resp.headers().get("authorization");
    // 204s and some error pages carry no readable body.
    let body = resp.text().await.unwrap_or_default();
    Ok(HttpResponse { status, authorization, body })
}

#[cfg(not(feature = "csr"))]
async fn send_request(url: String, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let _ = request;
    Err(ApiError::Network(format!("no browser transport available for {url}")))
}
