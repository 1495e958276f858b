//! Per-deployment configuration

use campus::graphql::GraphQlOperations;
use campus::AuthPolicy;
use serde::{Deserialize, Serialize};

/// Knobs that vary between backend deployments.
///
/// The catalog in [`endpoints`](crate::endpoints) records the newest
/// deployment's conventions. Older deployments disagree on the
/// `Authorization` rendering for a few endpoint families and on the GraphQL
/// field sets; both are configured here per deployment instead of being
/// unified in the catalog, because unification would silently change what
/// goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// `Authorization` rendering for the lectures family
    pub lectures_auth: AuthPolicy,
    /// `Authorization` rendering for the tutorials listing
    pub tutorials_auth: AuthPolicy,
    /// `Authorization` rendering for `/self`
    pub self_auth: AuthPolicy,
    /// GraphQL operation documents served by this deployment
    pub operations: GraphQlOperations,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            lectures_auth: AuthPolicy::Raw,
            tutorials_auth: AuthPolicy::Raw,
            self_auth: AuthPolicy::Raw,
            operations: GraphQlOperations::default(),
        }
    }
}

impl ConnectorConfig {
    /// Configuration for a deployment that serves Bearer tokens everywhere
    pub fn bearer() -> Self {
        Self {
            lectures_auth: AuthPolicy::Bearer,
            tutorials_auth: AuthPolicy::Bearer,
            self_auth: AuthPolicy::Bearer,
            operations: GraphQlOperations::default(),
        }
    }
}
