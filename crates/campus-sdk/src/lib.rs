//! Campus SDK
//!
//! Typed connector for the Campus learning platform backend. One method per
//! backend operation, each declared once as an endpoint descriptor in
//! [`endpoints`] and executed through `campus-http-client`. The connector is
//! stateless: it holds the deployment URLs and per-deployment configuration
//! and nothing else.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use campus::ApiUrl;
//! use campus_sdk::{CampusConnector, HttpClient};
//!
//! async fn example(token: &str) -> Result<(), campus_http_client::HttpError> {
//!     let connector = HttpClient::new(
//!         ApiUrl::from_str("https://learn.example.com/api")?,
//!         ApiUrl::from_str("https://learn.example.com/graphql")?,
//!     );
//!
//!     let modules = connector.get_modules().await?;
//!     for module in &modules {
//!         let tutorials = connector.get_upcoming_tutorials(token, Some(module.id.as_str())).await?;
//!         println!("{}: {} tutorials", module.title, tutorials.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connector;
pub mod endpoints;

pub use config::ConnectorConfig;
pub use connector::{CampusConnector, HttpClient};
