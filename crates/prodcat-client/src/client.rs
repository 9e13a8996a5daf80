//! HTTP transport for the catalog API.
//!
//! Every request is a GET carrying the API key in `x-api-key` and the wanted
//! format in `Accept`. The body is read in full before the status is
//! classified, so failures keep it for diagnostics. Nothing is retried.

use std::future::Future;
use std::time::Duration;

use prodcat_core::{AppConfig, DetailResult, Format, ListResult};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::decode::{decode_detail, decode_list};
use crate::error::{classify_response, ClientError};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Parameters of one list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub format: Format,
}

/// Client for a product catalog API.
///
/// Holds no per-request state; one instance can serve concurrent requests.
pub struct CatalogClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::with_base_url`].
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base,
            &config.api_key,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for `base_url` (also how tests point it at a mock
    /// server).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL that paths can be joined onto.
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Fetch`] on a non-2xx status.
    /// - [`ClientError::Parse`] if the body is not valid `query.format`.
    /// - [`ClientError::Http`] on network failure.
    pub async fn fetch_list(&self, query: &ListQuery) -> Result<ListResult, ClientError> {
        self.fetch_list_until(query, std::future::pending()).await
    }

    /// [`CatalogClient::fetch_list`], abandoned with [`ClientError::Cancelled`]
    /// as soon as `cancel` completes.
    ///
    /// # Errors
    ///
    /// As [`CatalogClient::fetch_list`], plus [`ClientError::Cancelled`].
    pub async fn fetch_list_until<C>(
        &self,
        query: &ListQuery,
        cancel: C,
    ) -> Result<ListResult, ClientError>
    where
        C: Future<Output = ()>,
    {
        let url = self.list_url(query)?;
        let body = self.get_text(url, query.format, cancel).await?;
        decode_list(body, query.format)
    }

    /// Fetches a single product record. The record is returned as the
    /// backend shaped it; see [`crate::canonicalize_detail`].
    ///
    /// # Errors
    ///
    /// As [`CatalogClient::fetch_list`], plus [`ClientError::InvalidId`] for
    /// an empty id or a `.`/`..` id, without sending a request.
    pub async fn fetch_one(&self, id: &str, format: Format) -> Result<DetailResult, ClientError> {
        self.fetch_one_until(id, format, std::future::pending())
            .await
    }

    /// [`CatalogClient::fetch_one`] with a cancellation signal.
    ///
    /// # Errors
    ///
    /// As [`CatalogClient::fetch_one`], plus [`ClientError::Cancelled`].
    pub async fn fetch_one_until<C>(
        &self,
        id: &str,
        format: Format,
        cancel: C,
    ) -> Result<DetailResult, ClientError>
    where
        C: Future<Output = ()>,
    {
        let url = self.detail_url(id)?;
        let body = self.get_text(url, format, cancel).await?;
        decode_detail(body, format)
    }

    /// `{origin}/products?page={page}&limit={limit}`.
    ///
    /// `/products` is an absolute path, so any path on the base URL is
    /// replaced rather than extended.
    fn list_url(&self, query: &ListQuery) -> Result<Url, ClientError> {
        let mut url = self.products_url()?;
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.limit.to_string());
        Ok(url)
    }

    /// `{origin}/products/{id}` with `id` percent-encoded as one segment.
    ///
    /// URL parsing collapses `.` and `..` segments (encoded or not), so those
    /// ids and the empty id can never reach the detail endpoint.
    fn detail_url(&self, id: &str) -> Result<Url, ClientError> {
        let reason = match id {
            "" => Some("id is empty"),
            "." | ".." => Some("dot segments cannot be sent as a path segment"),
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(ClientError::InvalidId {
                id: id.to_owned(),
                reason,
            });
        }
        let mut url = self.products_url()?;
        url.path_segments_mut()
            .map_err(|()| self.invalid_base("URL cannot be used as a base"))?
            .push(id);
        Ok(url)
    }

    fn products_url(&self) -> Result<Url, ClientError> {
        self.base_url
            .join("/products")
            .map_err(|e| self.invalid_base(&e.to_string()))
    }

    fn invalid_base(&self, reason: &str) -> ClientError {
        ClientError::InvalidBaseUrl {
            base_url: self.base_url.to_string(),
            reason: reason.to_owned(),
        }
    }

    /// Sends the GET, reads the body, and classifies the status. Dropping the
    /// in-flight request when `cancel` fires leaves nothing behind.
    async fn get_text<C>(&self, url: Url, format: Format, cancel: C) -> Result<String, ClientError>
    where
        C: Future<Output = ()>,
    {
        tracing::debug!(url = %url, %format, "requesting catalog");

        let exchange = async {
            let response = self
                .client
                .get(url.clone())
                .header(API_KEY_HEADER, self.api_key.as_str())
                .header(ACCEPT, format.accept_header())
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, ClientError>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            () = cancel => {
                tracing::debug!(url = %url, "catalog request cancelled");
                return Err(ClientError::Cancelled);
            }
            result = exchange => result?,
        };

        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "catalog responded");

        classify_response(status, body).map_err(|err| {
            tracing::warn!(url = %url, status = err.status_code, "catalog request failed");
            ClientError::Fetch(err)
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
