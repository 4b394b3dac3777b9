use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use minijinja::context;
use showcase::{views, Page};
use tracing::debug;

use crate::{app_state::AppState, error::PageError, render::NOT_FOUND_TEMPLATE};

type PageResult = Result<Html<String>, PageError>;

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

pub(crate) async fn index(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(Page::Index, &context! {})
}

pub(crate) async fn login(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(Page::Login, &context! {})
}

pub(crate) async fn register(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(Page::Register, &context! {})
}

pub(crate) async fn dashboard(State(state): State<Arc<AppState>>) -> PageResult {
    state
        .pages
        .render_page(Page::Dashboard, &views::dashboard_view(&state.fixtures))
}

pub(crate) async fn browse_sessions(State(state): State<Arc<AppState>>) -> PageResult {
    state
        .pages
        .render_page(Page::Browse, &views::browse_view(&state.fixtures))
}

pub(crate) async fn profile(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(Page::Profile, &context! {})
}

pub(crate) async fn change_password() -> Response {
    redirect(Page::ChangePassword)
}

pub(crate) async fn create_session(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(Page::CreateSession, &context! {})
}

pub(crate) async fn session_reports(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(
        Page::SessionReports,
        &views::session_reports_view(&state.fixtures),
    )
}

pub(crate) async fn trainer_dashboard(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(
        Page::TrainerDashboard,
        &views::trainer_dashboard_view(&state.fixtures, Utc::now()),
    )
}

pub(crate) async fn trainer_sessions(State(state): State<Arc<AppState>>) -> PageResult {
    state.pages.render_page(
        Page::TrainerSessions,
        &views::trainer_sessions_view(&state.fixtures),
    )
}

pub(crate) async fn logout() -> Response {
    redirect(Page::Logout)
}

pub(crate) async fn session_room(Path(session_id): Path<String>) -> Response {
    debug!(%session_id, "session rooms are not served, sending to landing page");
    redirect(Page::SessionRoom)
}

pub(crate) async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    debug!(%uri, "no route matched");
    match state
        .pages
        .render_template(NOT_FOUND_TEMPLATE, &context! { path => uri.path() })
    {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}

fn redirect(page: Page) -> Response {
    match page.redirect_location() {
        Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        None => PageError::NoRedirect(page).into_response(),
    }
}
