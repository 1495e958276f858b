//! HTTP client wrapper

use std::future::Future;

use campus::endpoint::{EmptyBodyPolicy, Endpoint, Method};
use campus::graphql::{GraphQlRequest, GraphQlResponse};
use campus::{ApiUrl, AuthPolicy, Outcome};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::HttpError;
use crate::Response;

const JSON: &str = "application/json";

/// HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Execute a body-less descriptor, decoding the response as JSON.
    ///
    /// A 204 response resolves per the descriptor's
    /// [`EmptyBodyPolicy`]; any other 2xx decodes its body into `R`;
    /// everything else is [`HttpError::Status`] carrying the exact code.
    pub async fn execute<R>(
        &self,
        base: &ApiUrl,
        endpoint: &Endpoint,
        token: Option<&str>,
        params: &[(&str, &str)],
    ) -> Response<Outcome<R>>
    where
        R: DeserializeOwned,
    {
        if endpoint.has_body {
            return Err(HttpError::Request(
                "endpoint requires a request body".to_string(),
            ));
        }
        let response = self.dispatch(base, endpoint, token, params, None).await?;
        decode_outcome(endpoint, response).await
    }

    /// Execute a descriptor that takes a JSON body, decoding the response.
    pub async fn execute_json<P, R>(
        &self,
        base: &ApiUrl,
        endpoint: &Endpoint,
        token: Option<&str>,
        params: &[(&str, &str)],
        body: &P,
    ) -> Response<Outcome<R>>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if !endpoint.has_body {
            return Err(HttpError::Request(
                "endpoint does not take a request body".to_string(),
            ));
        }
        let body = serde_json::to_string(body)?;
        let response = self
            .dispatch(base, endpoint, token, params, Some(body))
            .await?;
        decode_outcome(endpoint, response).await
    }

    /// Execute a side-effecting descriptor whose response body is never read.
    ///
    /// Any 2xx (204 included) is success; everything else is
    /// [`HttpError::Status`].
    pub async fn execute_unit(
        &self,
        base: &ApiUrl,
        endpoint: &Endpoint,
        token: Option<&str>,
        params: &[(&str, &str)],
    ) -> Response<()> {
        if endpoint.has_body {
            return Err(HttpError::Request(
                "endpoint requires a request body".to_string(),
            ));
        }
        let response = self.dispatch(base, endpoint, token, params, None).await?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(HttpError::Status(status))
        }
    }

    /// POST a GraphQL envelope and decode the response envelope.
    ///
    /// The body always carries both `query` and `variables`. Embedded
    /// `errors` arrays inside a 2xx response are returned untouched for the
    /// caller to inspect.
    pub async fn execute_graphql<R>(
        &self,
        url: &ApiUrl,
        auth: AuthPolicy,
        token: Option<&str>,
        request: &GraphQlRequest,
    ) -> Response<GraphQlResponse<R>>
    where
        R: DeserializeOwned,
    {
        if auth.requires_token() && token.is_none() {
            return Err(HttpError::Request(
                "endpoint requires an authorization token".to_string(),
            ));
        }

        let target = url.to_url()?;
        tracing::debug!(url = %target, "dispatching graphql request");

        let mut builder = self
            .inner
            .post(target)
            .header(ACCEPT, JSON)
            .json(request);
        if let Some(token) = token {
            if let Some(value) = auth.header_value(token) {
                builder = builder.header(AUTHORIZATION, value);
            }
        }

        let response = builder.send().await.map_err(HttpError::from)?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(HttpError::Status(status));
        }

        let text = response.text().await.map_err(HttpError::from)?;
        serde_json::from_str(&text).map_err(|err| {
            tracing::warn!("Undecodable graphql response: {}", err);
            HttpError::Decode(err.to_string())
        })
    }

    async fn dispatch(
        &self,
        base: &ApiUrl,
        endpoint: &Endpoint,
        token: Option<&str>,
        params: &[(&str, &str)],
        body: Option<String>,
    ) -> Response<reqwest::Response> {
        if endpoint.auth.requires_token() && token.is_none() {
            return Err(HttpError::Request(
                "endpoint requires an authorization token".to_string(),
            ));
        }

        let url = endpoint.build_url(base, params)?;
        tracing::debug!(%url, method = endpoint.method.as_str(), "dispatching request");

        let mut builder = match endpoint.method {
            Method::Get => self.inner.get(url),
            Method::Post => self.inner.post(url),
            Method::Put => self.inner.put(url),
            Method::Delete => self.inner.delete(url),
        };

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, JSON)
                .header(ACCEPT, JSON)
                .body(body);
        }

        if let Some(token) = token {
            if let Some(value) = endpoint.auth.header_value(token) {
                builder = builder.header(AUTHORIZATION, value);
            }
        }

        builder.send().await.map_err(HttpError::from)
    }
}

async fn decode_outcome<R>(endpoint: &Endpoint, response: reqwest::Response) -> Response<Outcome<R>>
where
    R: DeserializeOwned,
{
    let status = response.status().as_u16();

    if status == 204 {
        match endpoint.empty_body {
            EmptyBodyPolicy::Null => return Ok(Outcome::EmptyNull),
            EmptyBodyPolicy::List => return Ok(Outcome::EmptyList),
            // No declared convention: fall through and let the decode of the
            // empty body report the mismatch.
            EmptyBodyPolicy::None => {}
        }
    }

    if !(200..300).contains(&status) {
        return Err(HttpError::Status(status));
    }

    let text = response.text().await.map_err(HttpError::from)?;
    let decoded = serde_json::from_str(&text).map_err(|err| {
        tracing::warn!("Undecodable response body: {}", err);
        HttpError::Decode(err.to_string())
    })?;
    Ok(Outcome::Success(decoded))
}

/// Race `operation` against `cancel`.
///
/// Resolves to [`HttpError::Cancelled`] as soon as the token fires; no call
/// site of the original front-end aborted in flight, so this is offered as a
/// composable wrapper rather than baked into every entry point.
pub async fn with_cancellation<T>(
    cancel: &CancellationToken,
    operation: impl Future<Output = Response<T>>,
) -> Response<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(HttpError::Cancelled),
        result = operation => result,
    }
}

/// HTTP client builder for configuring proxy and TLS settings
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
    proxy: Option<ProxyConfig>,
}

#[derive(Debug)]
struct ProxyConfig {
    url: url::Url,
    matcher: Option<regex::Regex>,
}

impl HttpClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(ProxyConfig { url, matcher: None });
        self
    }

    /// Set a proxy URL with a host pattern matcher
    pub fn proxy_with_matcher(mut self, url: url::Url, pattern: &str) -> Response<Self> {
        let matcher = regex::Regex::new(pattern)
            .map_err(|e| HttpError::Proxy(format!("Invalid proxy pattern: {}", e)))?;
        self.proxy = Some(ProxyConfig {
            url,
            matcher: Some(matcher),
        });
        Ok(self)
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy_config) = self.proxy {
            let proxy_url = proxy_config.url.to_string();
            let proxy = if let Some(matcher) = proxy_config.matcher {
                reqwest::Proxy::custom(move |url| {
                    if matcher.is_match(url.host_str().unwrap_or("")) {
                        Some(proxy_url.clone())
                    } else {
                        None
                    }
                })
            } else {
                reqwest::Proxy::all(&proxy_url).map_err(|e| HttpError::Proxy(e.to_string()))?
            };
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(HttpError::from)?;
        Ok(HttpClient { inner: client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_new() {
        let client = HttpClient::new();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn client_default() {
        let client = HttpClient::default();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn builder_build() {
        let result = HttpClientBuilder::default().build();
        assert!(result.is_ok());
    }

    #[test]
    fn from_reqwest() {
        let reqwest_client = reqwest::Client::new();
        let client = HttpClient::from_reqwest(reqwest_client);
        let _ = format!("{:?}", client);
    }

    #[test]
    fn builder_accept_invalid_certs() {
        let result = HttpClientBuilder::default()
            .danger_accept_invalid_certs(true)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_proxy() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        let result = HttpClientBuilder::default().proxy(proxy_url).build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_proxy_with_valid_matcher() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        let result =
            HttpClientBuilder::default().proxy_with_matcher(proxy_url, r".*\.example\.com$");
        assert!(result.is_ok());

        let builder = result.expect("Valid matcher should succeed");
        assert!(builder.build().is_ok());
    }

    #[test]
    fn builder_proxy_with_invalid_matcher() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        let result = HttpClientBuilder::default().proxy_with_matcher(proxy_url, r"[invalid");
        assert!(result.is_err());

        if let Err(HttpError::Proxy(msg)) = result {
            assert!(msg.contains("Invalid proxy pattern"));
        } else {
            panic!("Expected HttpError::Proxy");
        }
    }
}
