//! Endpoint descriptors

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::api_url::{self, ApiUrl};
use crate::auth::AuthPolicy;

/// Descriptor error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A parameter was supplied that the descriptor does not declare
    #[error("Unknown parameter: {0}")]
    UnknownParam(String),
    /// A `:name` path placeholder was not filled
    #[error("Missing path parameter: {0}")]
    MissingPathParam(String),
    /// Url error
    #[error(transparent)]
    Url(#[from] api_url::Error),
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// The method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// How an HTTP 204 response body is interpreted.
///
/// The backend uses 204 for two different "nothing here" answers and the
/// caller cannot tell them apart from the response alone, so the expected
/// shape is declared per endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyBodyPolicy {
    /// 204 is not expected; no special handling
    #[default]
    None,
    /// 204 means the optional record is absent
    Null,
    /// 204 means the collection is empty
    List,
}

/// Static definition of one endpoint's shape and policies.
///
/// Declared once per call site and constant for the process lifetime. Path
/// segments starting with `:` are placeholders filled from the call's
/// parameters; every other parameter must be a declared query name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method
    pub method: Method,
    /// Path segments, static or `:name` placeholders
    pub path: &'static [&'static str],
    /// Declared query parameter names; params may omit any of them
    pub query: &'static [&'static str],
    /// `Authorization` header convention
    pub auth: AuthPolicy,
    /// Whether the endpoint takes a JSON body
    pub has_body: bool,
    /// HTTP 204 interpretation
    pub empty_body: EmptyBodyPolicy,
}

impl Endpoint {
    /// Create a descriptor with no query parameters, no auth and no body
    pub const fn new(method: Method, path: &'static [&'static str]) -> Self {
        Self {
            method,
            path,
            query: &[],
            auth: AuthPolicy::None,
            has_body: false,
            empty_body: EmptyBodyPolicy::None,
        }
    }

    /// GET descriptor
    pub const fn get(path: &'static [&'static str]) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST descriptor
    pub const fn post(path: &'static [&'static str]) -> Self {
        Self::new(Method::Post, path)
    }

    /// PUT descriptor
    pub const fn put(path: &'static [&'static str]) -> Self {
        Self::new(Method::Put, path)
    }

    /// DELETE descriptor
    pub const fn delete(path: &'static [&'static str]) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Declare query parameter names
    pub const fn with_query(mut self, names: &'static [&'static str]) -> Self {
        self.query = names;
        self
    }

    /// Set the `Authorization` convention
    pub const fn with_auth(mut self, auth: AuthPolicy) -> Self {
        self.auth = auth;
        self
    }

    /// Declare a JSON request body
    pub const fn with_body(mut self) -> Self {
        self.has_body = true;
        self
    }

    /// Set the HTTP 204 interpretation
    pub const fn with_empty_body(mut self, policy: EmptyBodyPolicy) -> Self {
        self.empty_body = policy;
        self
    }

    fn declares_query(&self, name: &str) -> bool {
        self.query.contains(&name)
    }

    /// Build the target URL for one call.
    ///
    /// Substitutes `params` into `:name` path placeholders and appends the
    /// remaining pairs as the query string. Placeholders must all be filled;
    /// declared query names may be omitted; undeclared names are rejected.
    pub fn build_url(&self, base: &ApiUrl, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut segments = Vec::with_capacity(self.path.len());
        for segment in self.path {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| Error::MissingPathParam(name.to_string()))?;
                    segments.push(value);
                }
                None => segments.push(segment),
            }
        }

        let mut pairs = Vec::new();
        for (key, value) in params {
            if self.path.iter().any(|s| s.strip_prefix(':') == Some(*key)) {
                continue;
            }
            if !self.declares_query(key) {
                return Err(Error::UnknownParam((*key).to_string()));
            }
            pairs.push((*key, *value));
        }

        Ok(base.join_query(&segments, &pairs)?)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn base() -> ApiUrl {
        ApiUrl::from_str("http://learn.example.com").unwrap()
    }

    const PAST_LECTURES: Endpoint = Endpoint::get(&["lectures", "past"])
        .with_query(&["module"])
        .with_auth(AuthPolicy::Raw)
        .with_empty_body(EmptyBodyPolicy::List);

    #[test]
    fn builds_static_path_with_query() {
        let url = PAST_LECTURES.build_url(&base(), &[("module", "5")]).unwrap();
        assert_eq!(
            "http://learn.example.com/lectures/past?module=5",
            url.to_string()
        );
    }

    #[test]
    fn declared_query_params_may_be_omitted() {
        let url = PAST_LECTURES.build_url(&base(), &[]).unwrap();
        assert_eq!("http://learn.example.com/lectures/past", url.to_string());
    }

    #[test]
    fn undeclared_params_are_rejected() {
        let err = PAST_LECTURES
            .build_url(&base(), &[("cohort", "9")])
            .unwrap_err();
        assert_eq!(err, Error::UnknownParam("cohort".to_string()));
    }

    #[test]
    fn path_placeholders_are_substituted() {
        const BY_ID: Endpoint = Endpoint::get(&["lectures", ":id", "flashcards"]);

        let url = BY_ID.build_url(&base(), &[("id", "42")]).unwrap();
        assert_eq!(
            "http://learn.example.com/lectures/42/flashcards",
            url.to_string()
        );
    }

    #[test]
    fn unfilled_placeholders_are_rejected() {
        const BY_ID: Endpoint = Endpoint::get(&["lectures", ":id"]);

        let err = BY_ID.build_url(&base(), &[]).unwrap_err();
        assert_eq!(err, Error::MissingPathParam("id".to_string()));
    }

    #[test]
    fn placeholder_values_do_not_leak_into_query() {
        const BY_ID: Endpoint = Endpoint::get(&["lectures", ":id"]).with_query(&["module"]);

        let url = BY_ID
            .build_url(&base(), &[("id", "42"), ("module", "5")])
            .unwrap();
        assert_eq!(
            "http://learn.example.com/lectures/42?module=5",
            url.to_string()
        );
    }

    #[test]
    fn descriptor_defaults_are_inert() {
        const MODULES: Endpoint = Endpoint::get(&["modules"]);

        assert_eq!(MODULES.auth, AuthPolicy::None);
        assert_eq!(MODULES.empty_body, EmptyBodyPolicy::None);
        assert!(!MODULES.has_body);
        assert!(MODULES.query.is_empty());
    }
}
