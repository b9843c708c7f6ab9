//! Book service: validates input and translates store outcomes into a
//! typed error taxonomy. All persistence goes through the injected
//! collection; HTTP handlers never touch the store directly.

use thiserror::Error;

use bookshelf_store::{DocumentId, SharedCollection, StoreError};

use super::models::{Book, BookFields};

/// Failures surfaced by the book service.
#[derive(Debug, Error)]
pub enum BookError {
    /// The requested identifier is absent, or not well-formed.
    #[error("Resource not found.")]
    NotFound,

    /// One or more required fields were missing or empty on create.
    #[error("Data submitted does not have the right schema.")]
    UnprocessableInput { missing: Vec<&'static str> },

    /// The underlying store failed to report a result.
    #[error("The store failed to complete the operation.")]
    Storage(#[from] StoreError),
}

impl BookError {
    /// Status token carried to the error view by redirecting handlers.
    pub fn status_token(&self) -> &'static str {
        match self {
            BookError::NotFound => "404",
            BookError::UnprocessableInput { .. } => "422",
            BookError::Storage(_) => "500",
        }
    }
}

pub struct BookService {
    books: SharedCollection<BookFields>,
}

impl BookService {
    pub fn new(books: SharedCollection<BookFields>) -> Self {
        Self { books }
    }

    /// Return all books with identifiers attached, in insertion order.
    /// An empty store yields an empty vector, not an error.
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        let documents = self.books.find().await?;
        Ok(documents
            .into_iter()
            .map(|doc| Book {
                id: doc.id,
                fields: doc.fields,
            })
            .collect())
    }

    /// Look up one book by its identifier text.
    pub async fn get_book(&self, id: &str) -> Result<Book, BookError> {
        let id = parse_id(id)?;
        let document = self.books.find_one(id).await?;
        document
            .map(|doc| Book {
                id: doc.id,
                fields: doc.fields,
            })
            .ok_or(BookError::NotFound)
    }

    /// Validate and persist a new book, returning its generated identifier.
    /// Validation failure leaves the store untouched.
    pub async fn create_book(&self, fields: BookFields) -> Result<DocumentId, BookError> {
        let missing = missing_fields(&fields);
        if !missing.is_empty() {
            return Err(BookError::UnprocessableInput { missing });
        }

        let id = self.books.insert_one(fields).await?;
        tracing::info!(id = %id, "book created");
        Ok(id)
    }

    /// Find and remove one book as a single atomic store operation.
    /// The loser of two racing deletes observes `NotFound`.
    pub async fn delete_book(&self, id: &str) -> Result<(), BookError> {
        let id = parse_id(id)?;
        let removed = self.books.find_one_and_delete(id).await?;
        match removed {
            Some(_) => {
                tracing::info!(id = %id, "book deleted");
                Ok(())
            }
            None => Err(BookError::NotFound),
        }
    }
}

/// A malformed identifier can never name a record, so it reads as absent.
fn parse_id(id: &str) -> Result<DocumentId, BookError> {
    id.parse().map_err(|_| BookError::NotFound)
}

fn missing_fields(fields: &BookFields) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for (name, value) in [
        ("title", &fields.title),
        ("author", &fields.author),
        ("publisher", &fields.publisher),
        ("date", &fields.date),
        ("website", &fields.website),
    ] {
        if value.trim().is_empty() {
            missing.push(name);
        }
    }
    missing
}
