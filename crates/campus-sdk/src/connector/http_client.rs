//! HTTP connector implementation

use async_trait::async_trait;
use campus::graphql::{GraphQlRequest, GraphQlResponse, LearnerData};
use campus::types::{
    Cohort, DailyReview, Flashcard, Learner, Lecture, Lesson, LoginRequest, LoginResponse, Module,
    SelfUpdate, Tutorial,
};
use campus::{ApiUrl, AuthPolicy, Outcome};
use campus_http_client::HttpError;
use serde_json::json;
use tracing::instrument;

use super::CampusConnector;
use crate::config::ConnectorConfig;
use crate::endpoints;

/// Http Client
#[derive(Debug, Clone)]
pub struct HttpClient {
    core: campus_http_client::HttpClient,
    base_url: ApiUrl,
    graphql_url: ApiUrl,
    config: ConnectorConfig,
}

impl HttpClient {
    /// Create a new [`HttpClient`] with the default deployment configuration
    pub fn new(base_url: ApiUrl, graphql_url: ApiUrl) -> Self {
        Self::with_config(base_url, graphql_url, ConnectorConfig::default())
    }

    /// Create a new [`HttpClient`] for a specific deployment
    pub fn with_config(base_url: ApiUrl, graphql_url: ApiUrl, config: ConnectorConfig) -> Self {
        Self {
            core: campus_http_client::HttpClient::new(),
            base_url,
            graphql_url,
            config,
        }
    }

    /// Create a new [`HttpClient`] on top of an already configured transport
    pub fn with_transport(
        core: campus_http_client::HttpClient,
        base_url: ApiUrl,
        graphql_url: ApiUrl,
        config: ConnectorConfig,
    ) -> Self {
        Self {
            core,
            base_url,
            graphql_url,
            config,
        }
    }

    /// The deployment configuration in use
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    async fn learner_query(
        &self,
        token: &str,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        let request = GraphQlRequest::new(document, variables);
        self.core
            .execute_graphql(&self.graphql_url, AuthPolicy::Raw, Some(token), &request)
            .await
    }
}

// Endpoints with a `None` empty-body policy never produce an empty outcome;
// reaching one here means the backend broke its contract.
fn require<T>(outcome: Outcome<T>) -> Result<T, HttpError> {
    outcome
        .into_option()
        .ok_or_else(|| HttpError::Decode("unexpected empty response".to_string()))
}

#[async_trait]
impl CampusConnector for HttpClient {
    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_self_cohorts(&self, token: &str) -> Result<Option<Vec<Cohort>>, HttpError> {
        let outcome = self
            .core
            .execute(&self.base_url, &endpoints::SELF_COHORTS, Some(token), &[])
            .await?;
        Ok(outcome.into_option())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_available_cohorts(
        &self,
        token: &str,
        module_id: &str,
    ) -> Result<Vec<Cohort>, HttpError> {
        let outcome = self
            .core
            .execute(
                &self.base_url,
                &endpoints::AVAILABLE_COHORTS,
                Some(token),
                &[("module", module_id)],
            )
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_module_cohort(
        &self,
        token: &str,
        module_id: &str,
    ) -> Result<Option<Cohort>, HttpError> {
        let outcome = self
            .core
            .execute(
                &self.base_url,
                &endpoints::MODULE_COHORT,
                Some(token),
                &[("module", module_id)],
            )
            .await?;
        Ok(outcome.into_option())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn join_cohort(&self, token: &str, cohort_id: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::JOIN_COHORT,
                Some(token),
                &[("cohort", cohort_id)],
            )
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn leave_module_cohort(&self, token: &str, module_id: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::LEAVE_COHORT,
                Some(token),
                &[("module", module_id)],
            )
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_self(&self, token: &str) -> Result<Learner, HttpError> {
        let endpoint = endpoints::GET_SELF.with_auth(self.config.self_auth);
        let outcome = self
            .core
            .execute(&self.base_url, &endpoint, Some(token), &[])
            .await?;
        require(outcome)
    }

    #[instrument(skip(self, token, update), fields(base_url = %self.base_url))]
    async fn update_self(&self, token: &str, update: &SelfUpdate) -> Result<Learner, HttpError> {
        let endpoint = endpoints::UPDATE_SELF.with_auth(self.config.self_auth);
        let outcome = self
            .core
            .execute_json(&self.base_url, &endpoint, Some(token), &[], update)
            .await?;
        require(outcome)
    }

    #[instrument(skip(self, request), fields(base_url = %self.base_url))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        let outcome = self
            .core
            .execute_json(&self.base_url, &endpoints::LOGIN, None, &[], request)
            .await?;
        require(outcome)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn request_email_login(&self, email: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::EMAIL_LOGIN,
                None,
                &[("email", email)],
            )
            .await
    }

    #[instrument(skip(self, code), fields(base_url = %self.base_url))]
    async fn verify_otp(&self, email: &str, code: &str) -> Result<LoginResponse, HttpError> {
        let outcome = self
            .core
            .execute(
                &self.base_url,
                &endpoints::VERIFY_OTP,
                None,
                &[("email", email), ("code", code)],
            )
            .await?;
        require(outcome)
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lecture_today(&self, token: &str) -> Result<Option<Lecture>, HttpError> {
        let endpoint = endpoints::LECTURE_TODAY.with_auth(self.config.lectures_auth);
        let outcome = self
            .core
            .execute(&self.base_url, &endpoint, Some(token), &[])
            .await?;
        Ok(outcome.into_option())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lectures_past(
        &self,
        token: &str,
        module_id: Option<&str>,
    ) -> Result<Vec<Lecture>, HttpError> {
        let endpoint = endpoints::LECTURES_PAST.with_auth(self.config.lectures_auth);
        let params: Vec<(&str, &str)> = module_id.map(|id| ("module", id)).into_iter().collect();
        let outcome = self
            .core
            .execute(&self.base_url, &endpoint, Some(token), &params)
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn complete_lecture(&self, token: &str, lecture_id: &str) -> Result<(), HttpError> {
        let endpoint = endpoints::COMPLETE_LECTURE.with_auth(self.config.lectures_auth);
        self.core
            .execute_unit(&self.base_url, &endpoint, Some(token), &[("id", lecture_id)])
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lecture_flashcards(
        &self,
        token: &str,
        lecture_id: &str,
    ) -> Result<Vec<Flashcard>, HttpError> {
        let endpoint = endpoints::LECTURE_FLASHCARDS.with_auth(self.config.lectures_auth);
        let outcome = self
            .core
            .execute(&self.base_url, &endpoint, Some(token), &[("id", lecture_id)])
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lesson_today(&self, token: &str) -> Result<Option<Lesson>, HttpError> {
        let outcome = self
            .core
            .execute(&self.base_url, &endpoints::LESSON_TODAY, Some(token), &[])
            .await?;
        Ok(outcome.into_option())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lessons_past(&self, token: &str) -> Result<Vec<Lesson>, HttpError> {
        let outcome = self
            .core
            .execute(&self.base_url, &endpoints::LESSONS_PAST, Some(token), &[])
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn complete_lesson(&self, token: &str, lesson_id: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::COMPLETE_LESSON,
                Some(token),
                &[("id", lesson_id)],
            )
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_lesson_flashcards(
        &self,
        token: &str,
        lesson_id: &str,
    ) -> Result<Vec<Flashcard>, HttpError> {
        let outcome = self
            .core
            .execute(
                &self.base_url,
                &endpoints::LESSON_FLASHCARDS,
                Some(token),
                &[("id", lesson_id)],
            )
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn get_modules(&self) -> Result<Vec<Module>, HttpError> {
        let outcome = self
            .core
            .execute(&self.base_url, &endpoints::MODULES, None, &[])
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_daily_review(&self, token: &str) -> Result<Option<DailyReview>, HttpError> {
        let outcome = self
            .core
            .execute(&self.base_url, &endpoints::DAILY_REVIEW, Some(token), &[])
            .await?;
        Ok(outcome.into_option())
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn pass_flashcard(&self, token: &str, card_id: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::PASS_FLASHCARD,
                Some(token),
                &[("id", card_id)],
            )
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn fail_flashcard(&self, token: &str, card_id: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(
                &self.base_url,
                &endpoints::FAIL_FLASHCARD,
                Some(token),
                &[("id", card_id)],
            )
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn complete_review(&self, token: &str) -> Result<(), HttpError> {
        self.core
            .execute_unit(&self.base_url, &endpoints::COMPLETE_REVIEW, Some(token), &[])
            .await
    }

    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_upcoming_tutorials(
        &self,
        token: &str,
        module_id: Option<&str>,
    ) -> Result<Vec<Tutorial>, HttpError> {
        let endpoint = endpoints::TUTORIALS.with_auth(self.config.tutorials_auth);
        let params: Vec<(&str, &str)> = module_id.map(|id| ("module", id)).into_iter().collect();
        let outcome = self
            .core
            .execute(&self.base_url, &endpoint, Some(token), &params)
            .await?;
        Ok(outcome.unwrap_or_empty())
    }

    #[instrument(skip(self, token), fields(graphql_url = %self.graphql_url))]
    async fn get_core_data(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        self.learner_query(
            token,
            &self.config.operations.core_data,
            json!({ "email": email }),
        )
        .await
    }

    #[instrument(skip(self, token), fields(graphql_url = %self.graphql_url))]
    async fn get_daily_review_cards(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        self.learner_query(
            token,
            &self.config.operations.daily_review,
            json!({ "email": email }),
        )
        .await
    }

    #[instrument(skip(self, token), fields(graphql_url = %self.graphql_url))]
    async fn get_recommended_lectures(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        self.learner_query(
            token,
            &self.config.operations.recommended_lectures,
            json!({ "email": email }),
        )
        .await
    }

    #[instrument(skip(self, token), fields(graphql_url = %self.graphql_url))]
    async fn get_self_profile(
        &self,
        token: &str,
        email: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        self.learner_query(
            token,
            &self.config.operations.self_profile,
            json!({ "email": email }),
        )
        .await
    }

    #[instrument(skip(self, token), fields(graphql_url = %self.graphql_url))]
    async fn register_learner(
        &self,
        token: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<GraphQlResponse<LearnerData>, HttpError> {
        self.learner_query(
            token,
            &self.config.operations.register_learner,
            json!({
                "email": email,
                "firstName": first_name,
                "lastName": last_name,
            }),
        )
        .await
    }
}
