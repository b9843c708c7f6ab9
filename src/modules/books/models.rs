use serde::{Deserialize, Serialize};

use bookshelf_store::DocumentId;

/// The five user-supplied fields of a book record. All are required,
/// free-form text; there are no cross-field invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publisher of the book
    pub publisher: String,
    /// Publication date as text (YYYY-MM-DD)
    pub date: String,
    /// Website URL as text
    pub website: String,
}

/// A persisted book: its fields plus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: DocumentId,
    pub fields: BookFields,
}
