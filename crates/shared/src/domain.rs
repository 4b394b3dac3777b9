use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_ID_CHARS: usize = 12;

/// Short identifier derived from a session title.
///
/// The derivation is lossy: distinct titles may share an id and nothing
/// enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn from_title(title: &str) -> Self {
        let slug = title
            .to_lowercase()
            .replace(' ', "-")
            .chars()
            .take(SESSION_ID_CHARS)
            .collect();
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Programming,
    Design,
    Marketing,
    Academic,
    Business,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Design => "design",
            Self::Marketing => "marketing",
            Self::Academic => "academic",
            Self::Business => "business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Learner,
    Trainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    Scheduled,
}

/// The identity every page is rendered for. There is no login; this value is
/// fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    pub bio: String,
    pub specialization: Option<String>,
    pub hourly_rate: Option<f64>,
    pub experience: Option<String>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub is_authenticated: bool,
}

impl User {
    /// Local part of the email address.
    pub fn email_handle(&self) -> &str {
        email_handle(&self.email)
    }
}

pub fn email_handle(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub scheduled_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub price: f64,
    pub description: String,
    pub rating: Option<u8>,
    pub trainer: Trainer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub status: ReportStatus,
    pub scheduled_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub category: Category,
    pub learner: Learner,
    pub detection_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub learner: Learner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_sessions: usize,
    pub upcoming_sessions: usize,
    pub total_earnings: String,
    pub average_rating: f64,
}
