//! Backend connector

use std::fmt::Debug;

use async_trait::async_trait;
use campus::graphql::{GraphQlResponse, LearnerData};
use campus::types::{
    Cohort, DailyReview, Flashcard, Learner, Lecture, Lesson, LoginRequest, LoginResponse, Module,
    SelfUpdate, Tutorial,
};
use campus_http_client::HttpError;

pub mod http_client;

pub use http_client::HttpClient;

/// Interface that connects the application to a backend deployment.
/// Typically represents an [HttpClient].
#[async_trait]
pub trait CampusConnector: Debug {
    /// Every cohort the learner belongs to; `None` when there are none
    async fn get_self_cohorts(&self, token: &str) -> Result<Option<Vec<Cohort>>, HttpError>;
    /// Cohorts open for joining on a module; empty when there are none
    async fn get_available_cohorts(
        &self,
        token: &str,
        module_id: &str,
    ) -> Result<Vec<Cohort>, HttpError>;
    /// The learner's applied/accepted cohort for a module
    async fn get_module_cohort(
        &self,
        token: &str,
        module_id: &str,
    ) -> Result<Option<Cohort>, HttpError>;
    /// Apply to a cohort
    async fn join_cohort(&self, token: &str, cohort_id: &str) -> Result<(), HttpError>;
    /// Leave the cohort joined for a module
    async fn leave_module_cohort(&self, token: &str, module_id: &str) -> Result<(), HttpError>;

    /// The learner's own profile
    async fn get_self(&self, token: &str) -> Result<Learner, HttpError>;
    /// Update the learner's own profile
    async fn update_self(&self, token: &str, update: &SelfUpdate) -> Result<Learner, HttpError>;

    /// Password login
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError>;
    /// Request a one-time code by mail
    async fn request_email_login(&self, email: &str) -> Result<(), HttpError>;
    /// Exchange a one-time code for a session token
    async fn verify_otp(&self, email: &str, code: &str) -> Result<LoginResponse, HttpError>;

    /// Today's lecture, if one is scheduled
    async fn get_lecture_today(&self, token: &str) -> Result<Option<Lecture>, HttpError>;
    /// Past lectures, optionally narrowed to a module
    async fn get_lectures_past(
        &self,
        token: &str,
        module_id: Option<&str>,
    ) -> Result<Vec<Lecture>, HttpError>;
    /// Mark a lecture as watched
    async fn complete_lecture(&self, token: &str, lecture_id: &str) -> Result<(), HttpError>;
    /// The flashcards attached to a lecture
    async fn get_lecture_flashcards(
        &self,
        token: &str,
        lecture_id: &str,
    ) -> Result<Vec<Flashcard>, HttpError>;

    /// Today's lesson, if one is scheduled
    async fn get_lesson_today(&self, token: &str) -> Result<Option<Lesson>, HttpError>;
    /// Past lessons
    async fn get_lessons_past(&self, token: &str) -> Result<Vec<Lesson>, HttpError>;
    /// Mark a lesson as done
    async fn complete_lesson(&self, token: &str, lesson_id: &str) -> Result<(), HttpError>;
    /// The flashcards attached to a lesson
    async fn get_lesson_flashcards(
        &self,
        token: &str,
        lesson_id: &str,
    ) -> Result<Vec<Flashcard>, HttpError>;

    /// The public module catalog
    async fn get_modules(&self) -> Result<Vec<Module>, HttpError>;

    /// The day's review queue, if anything is due
    async fn get_daily_review(&self, token: &str) -> Result<Option<DailyReview>, HttpError>;
    /// Record a passed card
    async fn pass_flashcard(&self, token: &str, card_id: &str) -> Result<(), HttpError>;
    /// Record a failed card
    async fn fail_flashcard(&self, token: &str, card_id: &str) -> Result<(), HttpError>;
    /// Close out the day's review
    async fn complete_review(&self, token: &str) -> Result<(), HttpError>;

    /// Upcoming tutorials, optionally narrowed to a module
    async fn get_upcoming_tutorials(
        &self,
        token: &str,
        module_id: Option<&str>,
    ) -> Result<Vec<Tutorial>, HttpError>;

    /// Home screen data for a learner
    async fn get_core_data(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError>;
    /// The learner's daily review cards
    async fn get_daily_review_cards(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError>;
    /// Lectures recommended to a learner
    async fn get_recommended_lectures(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError>;
    /// The learner's own profile, over GraphQL
    async fn get_self_profile(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError>;
    /// Self-registration
    async fn register_learner(
        &self,
        token: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError>;
}
