use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use showcase::Page;
use thiserror::Error;
use tracing::error;

const FAILURE_PAGE: &str = "<!doctype html>\n<html><head><title>500 Internal Server Error</title></head>\
<body><h1>Internal Server Error</h1><p>The server encountered an internal error and was unable \
to complete your request.</p></body></html>\n";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("{0:?} redirects and has no template")]
    NoTemplate(Page),
    #[error("{0:?} renders a template and has no redirect target")]
    NoRedirect(Page),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE)).into_response()
    }
}
