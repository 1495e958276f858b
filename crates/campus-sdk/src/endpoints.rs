//! Endpoint catalog.
//!
//! Every backend operation is declared here exactly once. The auth column
//! is the newest observed deployment's convention; the families that have
//! flipped conventions between deployments (lectures, tutorials, `/self`)
//! are overridable through [`ConnectorConfig`](crate::ConnectorConfig).

use campus::endpoint::{EmptyBodyPolicy, Endpoint};
use campus::AuthPolicy;

/// GET /cohorts — every cohort the learner belongs to; 204 means none
pub const SELF_COHORTS: Endpoint = Endpoint::get(&["cohorts"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::Null);

/// GET /cohorts/available?module= — open cohorts for a module; 204 means empty
pub const AVAILABLE_COHORTS: Endpoint = Endpoint::get(&["cohorts", "available"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::List);

/// GET /cohort/self?module= — the learner's cohort for a module; 204 means none
pub const MODULE_COHORT: Endpoint = Endpoint::get(&["cohort", "self"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::Null);

/// POST /cohort/join?cohort=
pub const JOIN_COHORT: Endpoint = Endpoint::post(&["cohort", "join"])
    .with_query(&["cohort"])
    .with_auth(AuthPolicy::Raw);

/// DELETE /cohort/leave?module=
pub const LEAVE_COHORT: Endpoint = Endpoint::delete(&["cohort", "leave"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw);

/// GET /self
pub const GET_SELF: Endpoint = Endpoint::get(&["self"]).with_auth(AuthPolicy::Raw);

/// PUT /self
pub const UPDATE_SELF: Endpoint = Endpoint::put(&["self"])
    .with_auth(AuthPolicy::Raw)
    .with_body();

/// POST /login — credentials in the body, no auth header
pub const LOGIN: Endpoint = Endpoint::post(&["login"]).with_body();

/// POST /login/email?email= — request an OTP mail, no auth header
pub const EMAIL_LOGIN: Endpoint = Endpoint::post(&["login", "email"]).with_query(&["email"]);

/// POST /verifyOtp?email=&code= — exchanges the OTP for a session token
pub const VERIFY_OTP: Endpoint = Endpoint::post(&["verifyOtp"]).with_query(&["email", "code"]);

/// GET /lectures/today — 204 means no lecture today
pub const LECTURE_TODAY: Endpoint = Endpoint::get(&["lectures", "today"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::Null);

/// GET /lectures/past[?module=] — 204 means empty history
pub const LECTURES_PAST: Endpoint = Endpoint::get(&["lectures", "past"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::List);

/// POST /lectures/complete?id=
pub const COMPLETE_LECTURE: Endpoint = Endpoint::post(&["lectures", "complete"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Raw);

/// GET /lectures/flashcards?id=
pub const LECTURE_FLASHCARDS: Endpoint = Endpoint::get(&["lectures", "flashcards"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Raw);

/// GET /lessons/today — 204 means no lesson today
pub const LESSON_TODAY: Endpoint = Endpoint::get(&["lessons", "today"])
    .with_auth(AuthPolicy::Bearer)
    .with_empty_body(EmptyBodyPolicy::Null);

/// GET /lessons/past — 204 means empty history
pub const LESSONS_PAST: Endpoint = Endpoint::get(&["lessons", "past"])
    .with_auth(AuthPolicy::Bearer)
    .with_empty_body(EmptyBodyPolicy::List);

/// POST /lessons/complete?id=
pub const COMPLETE_LESSON: Endpoint = Endpoint::post(&["lessons", "complete"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Bearer);

/// GET /lessons/flashcards?id=
pub const LESSON_FLASHCARDS: Endpoint = Endpoint::get(&["lessons", "flashcards"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Bearer);

/// GET /modules — public catalog, no auth
pub const MODULES: Endpoint = Endpoint::get(&["modules"]);

/// GET /review — 204 means nothing due today
pub const DAILY_REVIEW: Endpoint = Endpoint::get(&["review"])
    .with_auth(AuthPolicy::Bearer)
    .with_empty_body(EmptyBodyPolicy::Null);

/// POST /flashcard/pass?id=
pub const PASS_FLASHCARD: Endpoint = Endpoint::post(&["flashcard", "pass"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Bearer);

/// POST /flashcard/fail?id=
pub const FAIL_FLASHCARD: Endpoint = Endpoint::post(&["flashcard", "fail"])
    .with_query(&["id"])
    .with_auth(AuthPolicy::Bearer);

/// POST /review/complete
pub const COMPLETE_REVIEW: Endpoint =
    Endpoint::post(&["review", "complete"]).with_auth(AuthPolicy::Bearer);

/// GET /tutorials[?module=] — 204 means empty
pub const TUTORIALS: Endpoint = Endpoint::get(&["tutorials"])
    .with_query(&["module"])
    .with_auth(AuthPolicy::Raw)
    .with_empty_body(EmptyBodyPolicy::List);

#[cfg(test)]
mod tests {
    use campus::endpoint::Method;

    use super::*;

    #[test]
    fn collection_endpoints_declare_the_list_policy() {
        for endpoint in [AVAILABLE_COHORTS, LECTURES_PAST, LESSONS_PAST, TUTORIALS] {
            assert_eq!(endpoint.empty_body, EmptyBodyPolicy::List);
        }
    }

    #[test]
    fn optional_record_endpoints_declare_the_null_policy() {
        for endpoint in [SELF_COHORTS, MODULE_COHORT, LECTURE_TODAY, LESSON_TODAY, DAILY_REVIEW] {
            assert_eq!(endpoint.empty_body, EmptyBodyPolicy::Null);
        }
    }

    #[test]
    fn login_endpoints_send_no_auth_header() {
        for endpoint in [LOGIN, EMAIL_LOGIN, VERIFY_OTP] {
            assert_eq!(endpoint.auth, AuthPolicy::None);
        }
    }

    #[test]
    fn review_family_uses_bearer_tokens() {
        for endpoint in [DAILY_REVIEW, PASS_FLASHCARD, FAIL_FLASHCARD, COMPLETE_REVIEW] {
            assert_eq!(endpoint.auth, AuthPolicy::Bearer);
        }
    }

    #[test]
    fn cohort_family_uses_raw_tokens() {
        for endpoint in [
            SELF_COHORTS,
            AVAILABLE_COHORTS,
            MODULE_COHORT,
            JOIN_COHORT,
            LEAVE_COHORT,
        ] {
            assert_eq!(endpoint.auth, AuthPolicy::Raw);
        }
    }

    #[test]
    fn only_body_endpoints_declare_a_body() {
        assert!(LOGIN.has_body);
        assert!(UPDATE_SELF.has_body);
        assert!(!JOIN_COHORT.has_body);
        assert!(!EMAIL_LOGIN.has_body);
    }

    #[test]
    fn leave_cohort_is_a_delete() {
        assert_eq!(LEAVE_COHORT.method, Method::Delete);
    }
}
