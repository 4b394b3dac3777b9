use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use chrono::Utc;
use showcase::{Fixtures, Page};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

mod app_state;
mod config;
mod error;
mod pages;
mod render;

use app_state::AppState;
use config::{load_settings, Settings};
use render::Pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let state = build_state(Fixtures::load(Utc::now()))?;
    let app = build_router(Arc::new(state), &settings);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, static_dir = %settings.static_dir, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(fixtures: Fixtures) -> anyhow::Result<AppState> {
    let pages = Pages::new(&fixtures.current_user)?;
    Ok(AppState { fixtures, pages })
}

fn build_router(state: Arc<AppState>, settings: &Settings) -> Router {
    Router::new()
        .route("/healthz", get(pages::healthz))
        .route(Page::Index.path(), get(pages::index))
        .route(Page::Login.path(), get(pages::login))
        .route(Page::Register.path(), get(pages::register))
        .route(Page::Dashboard.path(), get(pages::dashboard))
        .route(Page::Browse.path(), get(pages::browse_sessions))
        .route(Page::Profile.path(), get(pages::profile))
        .route(Page::ChangePassword.path(), get(pages::change_password))
        .route(Page::CreateSession.path(), get(pages::create_session))
        .route(Page::SessionReports.path(), get(pages::session_reports))
        .route(Page::TrainerDashboard.path(), get(pages::trainer_dashboard))
        .route(Page::TrainerSessions.path(), get(pages::trainer_sessions))
        .route(Page::Logout.path(), get(pages::logout))
        .route(Page::SessionRoom.path(), get(pages::session_room))
        .nest_service("/static", ServeDir::new(&settings.static_dir))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
