//! Error handling for the bookshelf HTTP layer.
//!
//! Handler failures never reach the client as raw responses. They are
//! converted into a redirect to the error view, carrying a status token
//! and a human-readable message as query parameters.

use axum::{
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use crate::page::{self, PageOptions};

/// Path of the shared error view, mounted at the router root.
pub const ERROR_VIEW_PATH: &str = "/error";

/// Query parameters carried through the redirect to the error view.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorViewParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A handler failure on its way to the error view.
#[derive(Debug)]
pub struct ErrorRedirect {
    status: &'static str,
    message: String,
}

impl ErrorRedirect {
    pub fn new(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorRedirect {
    fn into_response(self) -> Response {
        tracing::error!(
            status = self.status,
            message = %self.message,
            "request failed; redirecting to error view"
        );

        let params = ErrorViewParams {
            status: Some(self.status.to_string()),
            message: Some(self.message),
        };
        let query = serde_urlencoded::to_string(&params).unwrap_or_default();

        Redirect::to(&format!("{ERROR_VIEW_PATH}?{query}")).into_response()
    }
}

/// `GET /error`: renders a generic failure message, overridden by the
/// optional `message`/`status` query parameters.
pub async fn error_view(Query(params): Query<ErrorViewParams>) -> Html<String> {
    let mut content = "There seems to be an error trying to complete the action. \
                       Please try again later."
        .to_string();

    if let Some(message) = params.message.filter(|m| !m.is_empty()) {
        content = message;
    }

    if let Some(status) = params.status.filter(|s| !s.is_empty()) {
        content.push_str(&format!(" (err: {status})"));
    }

    let fragment = format!(
        r#"<div class="card">
            <h1 class="card-header h5">Ooops... Something went wrong...</h1>
            <div class="card-body">
                <p class="card-text">{}</p>
                <a href="javascript:history.go(-1)" class="btn btn-sm btn-outline-primary">Return back</a>
            </div>
        </div>"#,
        page::escape(&content)
    );

    Html(page::render(&fragment, &PageOptions::titled("Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn error_redirect_targets_error_view_with_params() {
        let response = ErrorRedirect::new("404", "Resource not found.").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.starts_with("/error?"));
        assert!(location.contains("status=404"));
        assert!(location.contains("message=Resource"));
    }

    #[test]
    fn error_redirect_encodes_message_text() {
        let response = ErrorRedirect::new("422", "bad & wrong").into_response();
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(!location.contains(" & "));
    }

    #[tokio::test]
    async fn error_view_falls_back_to_generic_message() {
        let html = error_view(Query(ErrorViewParams::default())).await;
        assert!(html.0.contains("There seems to be an error"));
    }

    #[tokio::test]
    async fn error_view_uses_supplied_message_and_status() {
        let params = ErrorViewParams {
            status: Some("404".to_string()),
            message: Some("Resource not found.".to_string()),
        };
        let html = error_view(Query(params)).await;
        assert!(html.0.contains("Resource not found."));
        assert!(html.0.contains("(err: 404)"));
    }
}
