//! Wire records for the learning platform backend.
//!
//! Field names follow the backend's camelCase JSON. The backend schema is
//! externally owned and has drifted across deployments, so fields that any
//! observed deployment omits are `Option`.

use serde::{Deserialize, Serialize};

/// A course module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Module id
    pub id: String,
    /// Display title
    pub title: String,
    /// Longer description, if the deployment provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A cohort a learner can join for a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    /// Cohort id
    pub id: String,
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Application/membership status for the requesting learner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A lecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    /// Lecture id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A two-sided review card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Card id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Prompt side
    pub top_text: String,
    /// Answer side
    pub bottom_text: String,
}

/// A learner's scheduled instance of a review card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSlot {
    /// Slot id, distinct from the card id
    pub id: String,
    /// The card to show
    pub review_card: Flashcard,
    /// How many times the card has come around
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
}

/// The day's review queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReview {
    /// Cards due today
    #[serde(default)]
    pub cards: Vec<ReviewSlot>,
}

/// A tutorial session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    /// Tutorial id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A challenge offered to a learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Challenge id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A learner's standing on one challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerChallenge {
    /// Accepted / completed / offered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The challenge itself
    pub challenge: Challenge,
}

/// A mastered topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Topic id; older deployments omit it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Topic name
    pub name: String,
}

/// A star system in the exploration game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    /// System name
    pub name: String,
}

/// A planet in the exploration game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Planet name
    pub name: String,
    /// The system the planet belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_system: Option<StarSystem>,
}

/// A learner's progress on their current planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetProgress {
    /// Progress record id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Knowledge mined so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mined_knowledge: Option<i64>,
    /// Whether the planet is finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// The planet itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<Planet>,
}

/// The learner's standing in their active cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCohort {
    /// Application/membership status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The tutorial the cohort meets for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<Tutorial>,
}

/// A learner profile, as returned by `/self` and the GraphQL learner queries.
///
/// Which subset of fields is populated depends entirely on the query document
/// that was sent; everything beyond the name is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    /// Learner id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Account email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Challenge standings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<LearnerChallenge>,
    /// Tutorials the learner has unlocked
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unlocked_tutorials: Vec<Tutorial>,
    /// The learner's active cohort, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_cohort: Option<ActiveCohort>,
    /// Topics the learner has mastered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mastered_topics: Vec<Topic>,
    /// Exploration game position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_planet: Option<PlanetProgress>,
    /// Today's review queue, when the query asks for it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_review: Option<Vec<ReviewSlot>>,
    /// Recommended lectures, when the query asks for them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_lectures: Option<Vec<Lecture>>,
    /// Energy balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i64>,
    // One deployment serves `coin`, the rest `coins`.
    /// Coin balance
    #[serde(alias = "coin", skip_serializing_if = "Option::is_none")]
    pub coins: Option<i64>,
}

/// `POST /login` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Create a [`LoginRequest`]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A successful login or OTP verification: the session JWT and the
/// permission level it grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token
    pub jwt: String,
    /// Granted permission level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

/// `PUT /self` body; only the fields being changed are sent
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfUpdate {
    /// New given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New IANA timezone, used to anchor the daily review rollover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
