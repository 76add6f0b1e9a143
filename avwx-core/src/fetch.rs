//! HTTP seam between the client and the AVWX service.
//!
//! [`AvwxClient`](crate::AvwxClient) talks to the network only through the
//! [`Fetcher`] trait, so tests can swap in a canned transport and assert on
//! the exact URLs requested.

use std::fmt::Debug;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

/// Status and body of one response, before any status gating or decoding.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs one authenticated GET against the AVWX service.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> anyhow::Result<FetchResponse>;
}

/// Production transport: a [`reqwest::Client`] sending the account token as a
/// bearer credential on every request.
#[derive(Debug)]
pub struct HttpFetcher {
    token: String,
    http: Client,
}

impl HttpFetcher {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &Url) -> anyhow::Result<FetchResponse> {
        let response = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to send request to AVWX")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read AVWX response body")?;

        Ok(FetchResponse { status, body })
    }
}
