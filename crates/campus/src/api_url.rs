//! Base URL handling

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{ParseError, Url};

/// Url Error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Url error
    #[error(transparent)]
    Url(#[from] ParseError),
    /// Invalid URL structure
    #[error("Invalid URL")]
    InvalidUrl,
    /// Query pairs could not be encoded
    #[error("Invalid query string")]
    InvalidQuery,
}

/// Base URL of a backend deployment.
///
/// Stored in a normalized form: scheme and host are lowercased, trailing
/// slashes are trimmed, the path keeps its case. Two spellings of the same
/// deployment URL compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiUrl(String);

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl ApiUrl {
    fn normalize(raw: &str) -> Result<String, Error> {
        if raw.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let trimmed = raw.trim_end_matches('/');
        let (scheme, rest) = trimmed.split_once("://").ok_or(Error::InvalidUrl)?;
        let mut rest = rest.splitn(2, '/');
        let host = rest.next().ok_or(Error::InvalidUrl)?;
        if host.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let mut normalized = format!("{}://{}", scheme.to_lowercase(), host.to_lowercase());
        if let Some(path) = rest.next() {
            if !path.is_empty() {
                normalized.push('/');
                normalized.push_str(path);
            }
        }
        Ok(normalized)
    }

    /// Join onto url
    pub fn join(&self, path: &str) -> Result<Url, Error> {
        let url = Url::parse(&self.0)?;

        let base_path = url.path();
        let joined = if base_path.ends_with('/') {
            format!("{base_path}{path}")
        } else {
            format!("{base_path}/{path}")
        };

        let mut result = url.clone();
        result.set_path(&joined);
        Ok(result)
    }

    /// Append path elements onto the URL
    pub fn join_paths(&self, path_elements: &[&str]) -> Result<Url, Error> {
        self.join(&path_elements.join("/"))
    }

    /// Append path elements and a query string onto the URL.
    ///
    /// Pair order in the query string is not significant to the backend.
    pub fn join_query(&self, path_elements: &[&str], pairs: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.join_paths(path_elements)?;
        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(pairs).map_err(|_| Error::InvalidQuery)?;
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// The URL itself, without any path joined on
    pub fn to_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.0)?)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        match Self::normalize(url) {
            Ok(url) => Ok(Self(url)),
            Err(_) => Err(Error::InvalidUrl),
        }
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
