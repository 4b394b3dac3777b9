use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use shared::domain::{Report, Review, Session, Stats};

use crate::fixtures::{demo_learner, Fixtures};

pub const DASHBOARD_TOTAL_HOURS: u32 = 68;
pub const DASHBOARD_TRAINERS_COUNT: u32 = 12;

const REVIEW_AGE_DAYS: i64 = 3;
const REVIEW_RATING: u8 = 5;
const REVIEW_COMMENT: &str =
    "Absolutely phenomenal session! Clear explanations and great patience.";

#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub upcoming_sessions: &'a [Session],
    pub completed_sessions: &'a [Session],
    pub total_hours: u32,
    pub trainers_count: u32,
}

#[derive(Debug, Serialize)]
pub struct BrowseView<'a> {
    pub sessions: &'a [Session],
}

#[derive(Debug, Serialize)]
pub struct SessionReportsView<'a> {
    pub sessions: &'a [Report],
    pub stats: Stats,
}

/// Shared by the trainer dashboard and the trainer session list.
#[derive(Debug, Serialize)]
pub struct TrainerView<'a> {
    pub upcoming_sessions: &'a [Session],
    pub session_requests: &'a [Session],
    pub recent_reviews: Vec<Review>,
    pub stats: Stats,
}

pub fn dashboard_view(fixtures: &Fixtures) -> DashboardView<'_> {
    DashboardView {
        upcoming_sessions: &fixtures.upcoming,
        completed_sessions: &fixtures.completed,
        total_hours: DASHBOARD_TOTAL_HOURS,
        trainers_count: DASHBOARD_TRAINERS_COUNT,
    }
}

pub fn browse_view(fixtures: &Fixtures) -> BrowseView<'_> {
    BrowseView {
        sessions: &fixtures.catalog,
    }
}

pub fn session_reports_view(fixtures: &Fixtures) -> SessionReportsView<'_> {
    SessionReportsView {
        sessions: &fixtures.reports,
        stats: fixtures.stats(),
    }
}

/// `now` stamps the sample review, which is dated per request rather than at
/// load time.
pub fn trainer_dashboard_view(fixtures: &Fixtures, now: DateTime<Utc>) -> TrainerView<'_> {
    TrainerView {
        upcoming_sessions: &fixtures.upcoming,
        session_requests: &[],
        recent_reviews: vec![Review {
            rating: REVIEW_RATING,
            comment: REVIEW_COMMENT.to_string(),
            created_at: now - Duration::days(REVIEW_AGE_DAYS),
            learner: demo_learner(),
        }],
        stats: fixtures.stats(),
    }
}

pub fn trainer_sessions_view(fixtures: &Fixtures) -> TrainerView<'_> {
    TrainerView {
        upcoming_sessions: &fixtures.upcoming,
        session_requests: &[],
        recent_reviews: Vec::new(),
        stats: fixtures.stats(),
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
