use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::domain::{
    Category, Difficulty, Learner, Report, ReportStatus, Session, SessionId, Stats, Trainer, User,
    UserRole,
};

const TRAINER_SPECIALIZATION: &str = "Python & Data Science";
const TOTAL_EARNINGS: &str = "$1,247.50";
const AVERAGE_RATING: f64 = 4.8;
const COMPLETED_RATING: u8 = 5;

/// Compile-time description of a fixture session. Timestamps are relative so
/// the data always straddles the moment the fixtures are loaded.
struct SessionSeed {
    title: &'static str,
    category: Category,
    difficulty: Difficulty,
    trainer: (&'static str, &'static str),
    days_from_now: i64,
    duration_minutes: u32,
    price: f64,
    description: Option<&'static str>,
}

impl SessionSeed {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let description = match self.description {
            Some(text) => text.to_string(),
            None => format!(
                "A comprehensive {} session with expert guidance and hands-on exercises.",
                self.category.as_str()
            ),
        };
        Session {
            id: SessionId::from_title(self.title),
            title: self.title.to_string(),
            category: self.category,
            difficulty: self.difficulty,
            scheduled_time: now + Duration::days(self.days_from_now),
            duration_minutes: self.duration_minutes,
            price: self.price,
            description,
            rating: None,
            trainer: Trainer {
                first_name: self.trainer.0.to_string(),
                last_name: self.trainer.1.to_string(),
                specialization: TRAINER_SPECIALIZATION.to_string(),
            },
        }
    }
}

const PYTHON_DESCRIPTION: &str =
    "Master Python fundamentals with real-world data science projects and practical exercises.";
const ML_DESCRIPTION: &str =
    "Deep dive into ML algorithms, model training, and evaluation using scikit-learn.";
const UX_DESCRIPTION: &str =
    "Learn design thinking, wireframing, and user research from an industry professional.";

fn upcoming_seeds() -> [SessionSeed; 3] {
    [
        SessionSeed {
            title: "Python for Data Science",
            category: Category::Programming,
            difficulty: Difficulty::Beginner,
            trainer: ("Sarah", "Chen"),
            days_from_now: 2,
            duration_minutes: 90,
            price: 49.99,
            description: Some(PYTHON_DESCRIPTION),
        },
        SessionSeed {
            title: "Machine Learning Basics",
            category: Category::Programming,
            difficulty: Difficulty::Intermediate,
            trainer: ("Marcus", "Kim"),
            days_from_now: 5,
            duration_minutes: 120,
            price: 79.99,
            description: Some(ML_DESCRIPTION),
        },
        SessionSeed {
            title: "UI/UX Fundamentals",
            category: Category::Design,
            difficulty: Difficulty::Beginner,
            trainer: ("Priya", "Sharma"),
            days_from_now: 8,
            duration_minutes: 60,
            price: 39.99,
            description: Some(UX_DESCRIPTION),
        },
    ]
}

fn completed_seeds() -> [SessionSeed; 5] {
    [
        SessionSeed {
            title: "JavaScript ES6+",
            category: Category::Programming,
            difficulty: Difficulty::Intermediate,
            trainer: ("David", "Lee"),
            days_from_now: -5,
            duration_minutes: 90,
            price: 49.99,
            description: None,
        },
        SessionSeed {
            title: "React Fundamentals",
            category: Category::Programming,
            difficulty: Difficulty::Intermediate,
            trainer: ("Emma", "Wilson"),
            days_from_now: -12,
            duration_minutes: 120,
            price: 69.99,
            description: None,
        },
        SessionSeed {
            title: "SQL Mastery",
            category: Category::Academic,
            difficulty: Difficulty::Beginner,
            trainer: ("Raj", "Patel"),
            days_from_now: -20,
            duration_minutes: 60,
            price: 29.99,
            description: None,
        },
        SessionSeed {
            title: "Public Speaking",
            category: Category::Business,
            difficulty: Difficulty::Beginner,
            trainer: ("Lisa", "Moore"),
            days_from_now: -28,
            duration_minutes: 45,
            price: 35.99,
            description: None,
        },
        SessionSeed {
            title: "Digital Marketing",
            category: Category::Marketing,
            difficulty: Difficulty::Beginner,
            trainer: ("Tom", "Garcia"),
            days_from_now: -35,
            duration_minutes: 75,
            price: 44.99,
            description: None,
        },
    ]
}

fn catalog_seeds() -> [SessionSeed; 6] {
    [
        SessionSeed {
            title: "Python for Data Science",
            category: Category::Programming,
            difficulty: Difficulty::Beginner,
            trainer: ("Sarah", "Chen"),
            days_from_now: 3,
            duration_minutes: 90,
            price: 49.99,
            description: Some(PYTHON_DESCRIPTION),
        },
        SessionSeed {
            title: "Machine Learning Basics",
            category: Category::Programming,
            difficulty: Difficulty::Intermediate,
            trainer: ("Marcus", "Kim"),
            days_from_now: 5,
            duration_minutes: 120,
            price: 79.99,
            description: Some(ML_DESCRIPTION),
        },
        SessionSeed {
            title: "UI/UX Fundamentals",
            category: Category::Design,
            difficulty: Difficulty::Beginner,
            trainer: ("Priya", "Sharma"),
            days_from_now: 7,
            duration_minutes: 60,
            price: 39.99,
            description: Some(UX_DESCRIPTION),
        },
        SessionSeed {
            title: "Digital Marketing Strategy",
            category: Category::Marketing,
            difficulty: Difficulty::Intermediate,
            trainer: ("Tom", "Garcia"),
            days_from_now: 9,
            duration_minutes: 90,
            price: 54.99,
            description: Some(
                "Build and execute data-driven marketing campaigns across multiple channels.",
            ),
        },
        SessionSeed {
            title: "Advanced SQL & Databases",
            category: Category::Academic,
            difficulty: Difficulty::Advanced,
            trainer: ("Raj", "Patel"),
            days_from_now: 11,
            duration_minutes: 120,
            price: 74.99,
            description: Some(
                "Deep dive into advanced SQL queries, indexing strategies, and database optimization.",
            ),
        },
        SessionSeed {
            title: "React & Next.js Bootcamp",
            category: Category::Programming,
            difficulty: Difficulty::Intermediate,
            trainer: ("Emma", "Wilson"),
            days_from_now: 14,
            duration_minutes: 180,
            price: 89.99,
            description: Some(
                "Full-stack React development with Next.js, covering SSR, SSG, and API routes.",
            ),
        },
    ]
}

pub(crate) fn demo_learner() -> Learner {
    Learner {
        first_name: "Alex".into(),
        last_name: "Johnson".into(),
    }
}

fn report(
    title: &str,
    days_ago: i64,
    duration_minutes: u32,
    category: Category,
    detection_count: u32,
    now: DateTime<Utc>,
) -> Report {
    Report {
        title: title.to_string(),
        status: ReportStatus::Completed,
        scheduled_time: now - Duration::days(days_ago),
        duration_minutes,
        category,
        learner: demo_learner(),
        detection_count,
    }
}

/// The synthetic signed-in learner.
pub fn demo_user() -> User {
    User {
        id: "demo-user".into(),
        first_name: "Alex".into(),
        last_name: "Johnson".into(),
        email: "alex.johnson@mentorai.com".into(),
        role: UserRole::Learner,
        phone: "+91 98765 43210".into(),
        bio: "Passionate learner focused on AI and data science. Always looking to expand my \
              skills with expert guidance."
            .into(),
        specialization: None,
        hourly_rate: None,
        experience: None,
        timezone: "IST".into(),
        created_at: Utc
            .with_ymd_and_hms(2025, 6, 15, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        is_authenticated: true,
    }
}

/// Every record the pages display. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub current_user: User,
    pub upcoming: Vec<Session>,
    pub completed: Vec<Session>,
    pub catalog: Vec<Session>,
    pub reports: Vec<Report>,
}

impl Fixtures {
    /// Builds the data set with every relative timestamp anchored at `now`.
    /// The timestamps are not refreshed afterwards, so in a long-running
    /// process "upcoming" sessions eventually lie in the past.
    pub fn load(now: DateTime<Utc>) -> Self {
        let upcoming = upcoming_seeds()
            .into_iter()
            .map(|seed| seed.into_session(now))
            .collect();
        let completed = completed_seeds()
            .into_iter()
            .map(|seed| Session {
                rating: Some(COMPLETED_RATING),
                ..seed.into_session(now)
            })
            .collect();
        let catalog = catalog_seeds()
            .into_iter()
            .map(|seed| seed.into_session(now))
            .collect();
        let reports = vec![
            report(
                "JavaScript ES6+ Masterclass",
                5,
                90,
                Category::Programming,
                142,
                now,
            ),
            report(
                "React Fundamentals Workshop",
                12,
                120,
                Category::Programming,
                87,
                now,
            ),
            report("SQL Mastery Bootcamp", 20, 60, Category::Academic, 63, now),
        ];

        Self {
            current_user: demo_user(),
            upcoming,
            completed,
            catalog,
            reports,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_sessions: self.upcoming.len() + self.completed.len(),
            upcoming_sessions: self.upcoming.len(),
            total_earnings: TOTAL_EARNINGS.to_string(),
            average_rating: AVERAGE_RATING,
        }
    }
}
