//! HTTP transport for the Campus API client
//!
//! This crate executes one endpoint descriptor per call: it builds the URL,
//! attaches the descriptor's `Authorization` convention, dispatches over
//! `reqwest` and interprets the response status per the descriptor's
//! policies. Using this crate keeps the SDK crate free of any direct
//! dependency on the HTTP backend.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use campus::endpoint::{EmptyBodyPolicy, Endpoint};
//! use campus::{ApiUrl, AuthPolicy};
//! use campus_http_client::{HttpClient, Response};
//!
//! const TUTORIALS: Endpoint = Endpoint::get(&["tutorials"])
//!     .with_query(&["module"])
//!     .with_auth(AuthPolicy::Raw)
//!     .with_empty_body(EmptyBodyPolicy::List);
//!
//! async fn example(token: &str) -> Response<Vec<serde_json::Value>> {
//!     let base = ApiUrl::from_str("https://learn.example.com").map_err(campus_http_client::HttpError::from)?;
//!     let client = HttpClient::new();
//!     let outcome = client.execute(&base, &TUTORIALS, Some(token), &[]).await?;
//!     Ok(outcome.unwrap_or_empty())
//! }
//! ```

mod client;
mod error;

pub use client::{with_cancellation, HttpClient, HttpClientBuilder};
pub use error::HttpError;
pub use tokio_util::sync::CancellationToken;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;
