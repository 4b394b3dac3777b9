use super::*;
use axum::{http::StatusCode, response::IntoResponse};
use chrono::{TimeZone, Utc};
use showcase::{fixtures::demo_user, views, Fixtures};

fn pages() -> Pages {
    Pages::new(&demo_user()).expect("templates compile")
}

#[test]
fn money_formats_two_decimals() {
    assert_eq!(money(49.99), "$49.99");
    assert_eq!(money(5.0), "$5.00");
}

#[test]
fn datetime_formats_rfc3339_input() {
    assert_eq!(
        datetime("2026-03-03T12:00:00Z", Some("%Y-%m-%d")).expect("format"),
        "2026-03-03"
    );
    assert_eq!(
        datetime("2026-03-03T12:00:00.123456789Z", None).expect("format"),
        "Mar 03, 2026 at 12:00 PM"
    );
}

#[test]
fn datetime_rejects_non_timestamps() {
    let err = datetime("next tuesday", None).expect_err("should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn email_handle_filter_strips_domain() {
    assert_eq!(email_handle_filter("alex.johnson@mentorai.com"), "alex.johnson");
}

#[test]
fn missing_template_is_a_template_error() {
    let err = pages()
        .render_template("missing.html", &context! {})
        .expect_err("should fail");
    match err {
        PageError::Template(inner) => assert_eq!(inner.kind(), ErrorKind::TemplateNotFound),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn redirect_pages_have_nothing_to_render() {
    let err = pages()
        .render_page(Page::Logout, &context! {})
        .expect_err("should fail");
    assert!(matches!(err, PageError::NoTemplate(Page::Logout)));
}

#[test]
fn page_errors_become_internal_server_errors() {
    let response = PageError::NoTemplate(Page::ChangePassword).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn profile_uses_the_injected_user() {
    let Html(body) = pages()
        .render_page(Page::Profile, &context! {})
        .expect("render");
    assert!(body.contains("@alex.johnson"));
    assert!(body.contains("+91 98765 43210"));
    assert!(body.contains("June 2025"));
    assert!(body.contains("data-page=\"showcase_profile.html\""));
}

#[test]
fn session_reports_page_shows_the_stats_aggregate() {
    let now = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("time");
    let fixtures = Fixtures::load(now);
    let Html(body) = pages()
        .render_page(
            Page::SessionReports,
            &views::session_reports_view(&fixtures),
        )
        .expect("render");
    assert!(body.contains("<h3>8</h3>Total sessions"));
    assert!(body.contains("<h3>4.8</h3>Average rating"));
    assert!(body.contains("<td>142</td>"));
}
