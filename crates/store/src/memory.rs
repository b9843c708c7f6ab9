//! In-process collection engine backed by a mutex-guarded vector.
//!
//! Intended for local runs and tests. Documents are kept in insertion
//! order; every operation takes the lock once, so find-and-delete is
//! atomic with respect to concurrent callers.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Collection, Document, DocumentId, StoreError};

pub struct MemoryCollection<T> {
    documents: Mutex<Vec<Document<T>>>,
}

impl<T> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Document<T>>>, StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Backend("collection lock poisoned".to_string()))
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Collection<T> for MemoryCollection<T>
where
    T: Clone + Send + Sync,
{
    async fn insert_one(&self, fields: T) -> Result<DocumentId, StoreError> {
        let id = DocumentId::generate();
        let mut documents = self.lock()?;
        documents.push(Document { id, fields });
        Ok(id)
    }

    async fn find(&self) -> Result<Vec<Document<T>>, StoreError> {
        let documents = self.lock()?;
        Ok(documents.clone())
    }

    async fn find_one(&self, id: DocumentId) -> Result<Option<Document<T>>, StoreError> {
        let documents = self.lock()?;
        Ok(documents.iter().find(|doc| doc.id == id).cloned())
    }

    async fn find_one_and_delete(
        &self,
        id: DocumentId,
    ) -> Result<Option<Document<T>>, StoreError> {
        let mut documents = self.lock()?;
        let position = documents.iter().position(|doc| doc.id == id);
        Ok(position.map(|index| documents.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_id_and_find_returns_in_order() {
        let collection = MemoryCollection::new();

        let first = collection.insert_one("alpha".to_string()).await.unwrap();
        let second = collection.insert_one("beta".to_string()).await.unwrap();
        assert_ne!(first, second);

        let all = collection.find().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].fields, "alpha");
        assert_eq!(all[1].fields, "beta");
    }

    #[tokio::test]
    async fn find_on_empty_collection_returns_empty_vec() {
        let collection: MemoryCollection<String> = MemoryCollection::new();
        assert!(collection.find().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_returns_the_matching_document() {
        let collection = MemoryCollection::new();
        let id = collection.insert_one("alpha".to_string()).await.unwrap();

        let found = collection.find_one(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.fields, "alpha");

        let absent = DocumentId::generate();
        assert!(collection.find_one(absent).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_one_and_delete_removes_exactly_one_document() {
        let collection = MemoryCollection::new();
        let keep = collection.insert_one("keep".to_string()).await.unwrap();
        let gone = collection.insert_one("gone".to_string()).await.unwrap();

        let removed = collection.find_one_and_delete(gone).await.unwrap();
        assert_eq!(removed.unwrap().fields, "gone");

        let all = collection.find().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep);

        // Second delete of the same id loses the race and sees nothing.
        assert!(collection.find_one_and_delete(gone).await.unwrap().is_none());
    }
}
