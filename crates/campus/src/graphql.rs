//! GraphQL envelope and operation documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Learner;

/// The POST body of every GraphQL call: `{query, variables}`.
///
/// Both keys are always serialized, even when `variables` is empty — the
/// backend rejects envelopes missing either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlRequest {
    /// Operation document
    pub query: String,
    /// Operation variables; an empty object when the document takes none
    pub variables: Value,
}

impl GraphQlRequest {
    /// Create a request, coercing absent variables into an empty object
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        let variables = match variables {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message
    pub message: String,
    /// Path to the field the error applies to, if the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
}

/// A decoded GraphQL envelope.
///
/// A 200 response can still carry an `errors` array next to partial `data`.
/// The client surfaces both untouched and never inspects `errors` — whether
/// embedded errors should fail the call is unresolved in the backend's
/// consumers, so the decision is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Decoded `data` field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Embedded errors, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

/// The `data` field of the learner operations
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerData {
    /// `getLearner` result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_learner: Option<Learner>,
    /// `getSelf` result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_self: Option<Learner>,
    /// `addLearner` result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_learner: Option<Learner>,
}

const CORE_DATA: &str = r#"
  query GetHomeData($email: String!) {
    getLearner(email: $email) {
      firstName,
      lastName,
      challenges {
        status,
        challenge {
          id,
          title,
          description
        }
      },
      unlockedTutorials {
        id,
        title,
        description
      },
      activeCohort {
        status,
        tutorial {
          title,
          description,
        },
      },
      masteredTopics {
        id,
        name,
      },
      currentPlanet {
        id,
        minedKnowledge,
        completed,
        planet {
          name,
          starSystem {
            name,
          }
        },
      },
      energy,
      coins
    }
  }"#;

const DAILY_REVIEW: &str = r#"
  query GetDailyReview($email: String!) {
    getLearner(email: $email) {
      dailyReview {
        id,
        reviewCard {
          topText,
          bottomText
        }
      }
    }
  }"#;

const RECOMMENDED_LECTURES: &str = r#"
  query GetRecommendedLectures($email: String!) {
    getLearner(email: $email) {
      recommendedLectures {
        title,
      }
    }
  }"#;

const SELF_PROFILE: &str = r#"
  query GetSelf($email: String!) {
    getSelf(email: $email) {
      id,
      firstName,
      lastName,
      email,
      energy,
      coins
    }
  }"#;

const REGISTER_LEARNER: &str = r#"
  mutation AddLearner($email: String!, $firstName: String!, $lastName: String!) {
    addLearner(email: $email, firstName: $firstName, lastName: $lastName) {
      id,
      firstName,
      lastName,
      email
    }
  }"#;

/// The operation documents one deployment serves.
///
/// The GraphQL schema is externally owned and its field sets have drifted
/// between deployments (`coins` vs `coin`, topic field sets, and so on), so
/// every document is an overridable field rather than a hard-coded constant.
/// The defaults match the newest deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlOperations {
    /// `GetLearner` home/core data document
    pub core_data: String,
    /// `GetLearner` daily review document
    pub daily_review: String,
    /// `GetLearner` recommended lectures document
    pub recommended_lectures: String,
    /// `GetSelf` document
    pub self_profile: String,
    /// `addLearner` self-registration mutation
    pub register_learner: String,
}

impl Default for GraphQlOperations {
    fn default() -> Self {
        Self {
            core_data: CORE_DATA.to_string(),
            daily_review: DAILY_REVIEW.to_string(),
            recommended_lectures: RECOMMENDED_LECTURES.to_string(),
            self_profile: SELF_PROFILE.to_string(),
            register_learner: REGISTER_LEARNER.to_string(),
        }
    }
}
