//! Authorization header conventions

use serde::{Deserialize, Serialize};

/// `Authorization` header rendering for one endpoint.
///
/// The backend deployments this client was written against disagree on the
/// header convention: some expect the bare token, others expect a
/// `Bearer `-prefixed token, and the OTP flow expects no header at all. The
/// convention is part of each endpoint's contract, so it is declared on the
/// descriptor rather than guessed from the token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthPolicy {
    /// No `Authorization` header is sent, even when a token is supplied
    #[default]
    None,
    /// The token is sent verbatim
    Raw,
    /// The token is sent as `Bearer <token>`
    Bearer,
}

impl AuthPolicy {
    /// Whether a call against an endpoint with this policy must supply a token
    pub fn requires_token(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Render the `Authorization` header value for `token`.
    ///
    /// Returns `None` when the policy sends no header.
    pub fn header_value(&self, token: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Raw => Some(token.to_string()),
            Self::Bearer => Some(format!("Bearer {token}")),
        }
    }
}
