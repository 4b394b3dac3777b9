use super::*;
use chrono::TimeZone;

fn fixtures_at() -> (Fixtures, DateTime<Utc>) {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("time");
    (Fixtures::load(now), now)
}

#[test]
fn dashboard_constants_ignore_list_contents() {
    let (mut fixtures, _) = fixtures_at();
    fixtures.upcoming.clear();
    fixtures.completed.truncate(1);

    let view = dashboard_view(&fixtures);
    assert_eq!(view.total_hours, 68);
    assert_eq!(view.trainers_count, 12);
    assert!(view.upcoming_sessions.is_empty());
    assert_eq!(view.completed_sessions.len(), 1);
}

#[test]
fn browse_lists_the_full_catalog() {
    let (fixtures, _) = fixtures_at();
    let view = browse_view(&fixtures);
    let titles: Vec<_> = view.sessions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Python for Data Science",
            "Machine Learning Basics",
            "UI/UX Fundamentals",
            "Digital Marketing Strategy",
            "Advanced SQL & Databases",
            "React & Next.js Bootcamp",
        ]
    );
}

#[test]
fn session_reports_keep_load_order_and_carry_stats() {
    let (fixtures, _) = fixtures_at();
    let view = session_reports_view(&fixtures);
    let detections: Vec<_> = view.sessions.iter().map(|r| r.detection_count).collect();
    assert_eq!(detections, vec![142, 87, 63]);
    assert_eq!(view.sessions[0].title, "JavaScript ES6+ Masterclass");
    assert_eq!(view.stats.total_sessions, 8);
}

#[test]
fn trainer_dashboard_has_one_review_dated_three_days_back() {
    let (fixtures, now) = fixtures_at();
    let view = trainer_dashboard_view(&fixtures, now);
    assert!(view.session_requests.is_empty());
    assert_eq!(view.upcoming_sessions.len(), 3);
    assert_eq!(view.recent_reviews.len(), 1);

    let review = &view.recent_reviews[0];
    assert_eq!(review.rating, 5);
    assert_eq!(review.learner.first_name, "Alex");
    assert_eq!(review.created_at, now - Duration::days(3));
}

#[test]
fn trainer_sessions_has_the_same_shape_without_reviews() {
    let (fixtures, now) = fixtures_at();
    let sessions = trainer_sessions_view(&fixtures);
    let dashboard = trainer_dashboard_view(&fixtures, now);
    assert!(sessions.recent_reviews.is_empty());
    assert_eq!(sessions.stats, dashboard.stats);
    assert_eq!(sessions.upcoming_sessions, dashboard.upcoming_sessions);
}

#[test]
fn views_serialize_with_the_field_names_templates_use() {
    let (fixtures, _) = fixtures_at();
    let value = serde_json::to_value(dashboard_view(&fixtures)).expect("json");
    assert_eq!(value["total_hours"], 68);
    assert_eq!(value["trainers_count"], 12);
    assert_eq!(value["upcoming_sessions"][0]["id"], "python-for-d");
    assert!(value["upcoming_sessions"][0]["rating"].is_null());
    assert_eq!(value["completed_sessions"][0]["rating"], 5);
    assert_eq!(value["completed_sessions"][0]["trainer"]["first_name"], "David");
}
