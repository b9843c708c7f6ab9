//! Document store abstraction for bookshelf.
//!
//! The application talks to a [`Collection`] trait object so that
//! persistence is swappable and testable without a live external
//! database. The endpoint URL scheme in the settings selects the
//! engine; `mem://` is the in-process engine shipped here.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::{Timestamp, Uuid};

pub mod memory;

/// Identifier assigned by the store when a document is inserted.
///
/// Identifiers are UUIDv7, so they are unique across the lifetime of a
/// collection and are never reused after a delete. They round-trip
/// to/from text via `Display` and `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identifier. Only engines mint these.
    pub(crate) fn generate() -> Self {
        let timestamp = Timestamp::now(uuid::NoContext);
        Self(Uuid::new_v7(timestamp))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A stored document: the caller's fields plus the store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub id: DocumentId,
    pub fields: T,
}

/// Errors surfaced by store engines.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("insert reported no result")]
    NoInsertResult,

    #[error("store backend failure: {0}")]
    Backend(String),
}

/// A keyed document collection with single-document atomic operations.
#[async_trait]
pub trait Collection<T>: Send + Sync {
    /// Insert one document and return its newly assigned identifier.
    async fn insert_one(&self, fields: T) -> Result<DocumentId, StoreError>;

    /// Return all documents in insertion order.
    async fn find(&self) -> Result<Vec<Document<T>>, StoreError>;

    /// Return the document with the given id, if present.
    async fn find_one(&self, id: DocumentId) -> Result<Option<Document<T>>, StoreError>;

    /// Find and remove the document with the given id as one operation.
    /// Returns the removed document, or `None` when absent.
    async fn find_one_and_delete(&self, id: DocumentId)
        -> Result<Option<Document<T>>, StoreError>;
}

/// Shared handle to a collection behind the trait object seam.
pub type SharedCollection<T> = Arc<dyn Collection<T>>;

/// Open the collection engine selected by the endpoint URL scheme.
pub fn open_collection<T>(endpoint: &str, name: &str) -> Result<SharedCollection<T>, StoreError>
where
    T: Clone + Send + Sync + 'static,
{
    match endpoint.split_once("://") {
        Some(("mem", _)) => {
            tracing::info!(collection = name, "opening in-process memory collection");
            Ok(Arc::new(memory::MemoryCollection::new()))
        }
        _ => Err(StoreError::Backend(format!(
            "unsupported store endpoint '{endpoint}'"
        ))),
    }
}
