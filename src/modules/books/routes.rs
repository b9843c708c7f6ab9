//! HTTP handlers for the books module. Handlers adapt requests to book
//! service calls and render pages; they hold no business logic of their
//! own. Every service failure becomes a redirect to the error view.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use bookshelf_http::error::ErrorRedirect;
use bookshelf_http::page::{self, PageOptions};

use super::models::BookFields;
use super::pages;
use super::sample;
use super::service::{BookError, BookService};

/// Absolute path of the list view (the module's mount prefix).
const LIST_PATH: &str = "/books";

pub fn router(service: Arc<BookService>) -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/create", get(create_form).post(create_book))
        .route("/delete", post(delete_book))
        .with_state(service)
}

impl From<BookError> for ErrorRedirect {
    fn from(err: BookError) -> Self {
        ErrorRedirect::new(err.status_token(), err.to_string())
    }
}

/// `GET /books`: table of all books.
async fn list_books(State(service): State<Arc<BookService>>) -> Response {
    match service.list_books().await {
        Ok(books) => Html(page::render(
            &pages::list_fragment(&books),
            &PageOptions::titled("List of Books"),
        ))
        .into_response(),
        Err(err) => ErrorRedirect::from(err).into_response(),
    }
}

#[derive(Debug, Default, Deserialize)]
struct CreateFormQuery {
    /// Present (with any value) to pre-fill the form with sample data.
    random: Option<String>,
}

/// `GET /books/create`: empty or randomly pre-filled input form.
/// Pure; no persistence side effect.
async fn create_form(Query(query): Query<CreateFormQuery>) -> Html<String> {
    let prefill = if query.random.is_some() {
        sample::book_fields()
    } else {
        BookFields::default()
    };

    Html(page::render(
        &pages::create_form_fragment(&prefill),
        &PageOptions::titled("Add a New Book"),
    ))
}

/// Typed create payload. Absent keys become empty strings so that the
/// service, not the extractor, decides what is unprocessable.
#[derive(Debug, Deserialize)]
struct CreateBookForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    website: String,
}

impl From<CreateBookForm> for BookFields {
    fn from(form: CreateBookForm) -> Self {
        Self {
            title: form.title,
            author: form.author,
            publisher: form.publisher,
            date: form.date,
            website: form.website,
        }
    }
}

/// `POST /books/create`: validate, persist, and confirm.
async fn create_book(
    State(service): State<Arc<BookService>>,
    Form(form): Form<CreateBookForm>,
) -> Response {
    let fields = BookFields::from(form);

    match service.create_book(fields.clone()).await {
        Ok(id) => Html(page::render(
            &pages::confirmation_fragment(&id, &fields),
            &PageOptions::titled("Submission Complete"),
        ))
        .into_response(),
        Err(err) => ErrorRedirect::from(err).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct DeleteBookForm {
    #[serde(default)]
    id: String,
}

/// `POST /books/delete`: delete by identifier, then back to the list.
async fn delete_book(
    State(service): State<Arc<BookService>>,
    Form(form): Form<DeleteBookForm>,
) -> Response {
    match service.delete_book(&form.id).await {
        Ok(()) => Redirect::to(LIST_PATH).into_response(),
        Err(err) => ErrorRedirect::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use bookshelf_store::memory::MemoryCollection;

    fn service() -> Arc<BookService> {
        Arc::new(BookService::new(Arc::new(MemoryCollection::new())))
    }

    fn valid_form() -> CreateBookForm {
        CreateBookForm {
            title: "X".to_string(),
            author: "Y".to_string(),
            publisher: "Z".to_string(),
            date: "2020-01-01".to_string(),
            website: "https://x.test".to_string(),
        }
    }

    #[tokio::test]
    async fn list_renders_a_full_page() {
        let response = list_books(State(service())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_form_renders_without_prefill() {
        let html = create_form(Query(CreateFormQuery::default())).await;
        assert!(html.0.contains("Add a New Book"));
        assert!(html.0.contains(r#"name="title" value="""#));
    }

    #[tokio::test]
    async fn create_form_prefills_when_random_flag_is_set() {
        let query = CreateFormQuery {
            random: Some(String::new()),
        };
        let html = create_form(Query(query)).await;
        assert!(!html.0.contains(r#"name="title" value="""#));
    }

    #[tokio::test]
    async fn create_with_valid_fields_renders_confirmation() {
        let response = create_book(State(service()), Form(valid_form())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_with_missing_field_redirects_to_error_view() {
        let mut form = valid_form();
        form.title.clear();

        let response = create_book(State(service()), Form(form)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.starts_with("/error?"));
        assert!(location.contains("status=422"));
    }

    #[tokio::test]
    async fn delete_of_existing_book_redirects_to_list() {
        let service = service();
        let id = service
            .create_book(BookFields::from(valid_form()))
            .await
            .unwrap();

        let form = DeleteBookForm { id: id.to_string() };
        let response = delete_book(State(service), Form(form)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(location, LIST_PATH);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_redirects_to_error_view() {
        let form = DeleteBookForm {
            id: "not-a-uuid".to_string(),
        };
        let response = delete_book(State(service()), Form(form)).await;

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.starts_with("/error?"));
        assert!(location.contains("status=404"));
    }
}
