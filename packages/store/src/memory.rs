use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::document::{DocumentLocation, DocumentStore, EncodedDocument, StoredDocument};
use crate::error::StoreError;

/// In-memory DocumentStore for the web and for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    documents: Arc<Mutex<HashMap<String, EncodedDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    async fn save(&self, document: &EncodedDocument) -> Result<StoredDocument, StoreError> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document.parcel_id.clone(), document.clone());
        Ok(StoredDocument {
            encoded: document.clone(),
            location: DocumentLocation::Memory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn held(store: &MemoryStore, parcel_id: &str) -> Option<EncodedDocument> {
        store.documents.lock().unwrap().get(parcel_id).cloned()
    }

    #[tokio::test]
    async fn test_save_keeps_document() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(held(&store, "7").is_none());

        let encoded = Document::new("7", b"%PDF".to_vec()).encode();
        let stored = store.save(&encoded).await.unwrap();
        assert_eq!(stored.location, DocumentLocation::Memory);
        assert!(stored.path().is_none());

        assert_eq!(held(&store, "7"), Some(encoded));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_copy() {
        let store = MemoryStore::new();
        store.save(&Document::new("7", b"old".to_vec()).encode()).await.unwrap();
        store.save(&Document::new("7", b"new".to_vec()).encode()).await.unwrap();

        let loaded = held(&store, "7").unwrap();
        assert_eq!(loaded.decode().unwrap().bytes, b"new");
        assert_eq!(store.len(), 1);
    }
}
