//! Campus shared types.
//!
//! This crate is the base foundation to build things that can talk to a Campus
//! learning platform backend.
//!
//! It contains the endpoint descriptors, authorization policies, response
//! outcome model, wire records and GraphQL envelope shared by the SDK crates.
//! Nothing in here performs I/O; the transport lives in `campus-http-client`.

pub mod api_url;
pub mod auth;
pub mod endpoint;
pub mod graphql;
pub mod outcome;
pub mod types;

pub use self::api_url::ApiUrl;
pub use self::auth::AuthPolicy;
pub use self::endpoint::{EmptyBodyPolicy, Endpoint, Method};
pub use self::graphql::{GraphQlOperations, GraphQlRequest, GraphQlResponse};
pub use self::outcome::Outcome;
