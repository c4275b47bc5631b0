//! Download a parcel label and hand it to the platform share sheet.
//!
//! Nothing here is user-visible on failure: every problem is logged and
//! reported through [`ShareOutcome`] for the caller's benefit only.

use std::future::Future;

use api::{Id, ParcelService};
use store::{Document, DocumentStore, StoredDocument};

/// Somewhere a stored label can be sent.
pub trait ShareTarget {
    fn is_available(&self, document: &StoredDocument) -> impl Future<Output = bool>;
    fn share(&self, document: &StoredDocument) -> impl Future<Output = Result<(), String>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShareOutcome {
    /// Stored and handed to the share target.
    Shared(StoredDocument),
    /// Stored, but this platform has no way to share it.
    Unavailable(StoredDocument),
    /// Download, storage or sharing failed.
    Failed(String),
}

pub async fn download_and_share<S, D, T>(
    service: &S,
    store: &D,
    target: &T,
    parcel_id: &Id,
) -> ShareOutcome
where
    S: ParcelService,
    D: DocumentStore,
    T: ShareTarget,
{
    let bytes = match service.parcel_pdf(parcel_id).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("PDF download error for parcel {}: {}", parcel_id, e);
            return ShareOutcome::Failed(e.to_string());
        }
    };

    let encoded = Document::new(parcel_id.to_string(), bytes).encode();
    let stored = match store.save(&encoded).await {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!("Failed to store {}: {}", encoded.file_name(), e);
            return ShareOutcome::Failed(e.to_string());
        }
    };
    match stored.path() {
        Some(path) => tracing::info!("PDF saved to {}", path.display()),
        None => tracing::info!("PDF {} kept in memory", encoded.file_name()),
    }

    if !target.is_available(&stored).await {
        tracing::warn!("Sharing not available on this platform");
        return ShareOutcome::Unavailable(stored);
    }

    match target.share(&stored).await {
        Ok(()) => ShareOutcome::Shared(stored),
        Err(e) => {
            tracing::error!("Failed to share {}: {}", encoded.file_name(), e);
            ShareOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use api::{MemoryService, NewRecipient};
    use store::{DocumentLocation, MemoryStore};

    #[derive(Default)]
    struct FakeShare {
        unavailable: bool,
        broken: bool,
        shared: RefCell<Vec<String>>,
    }

    impl ShareTarget for FakeShare {
        async fn is_available(&self, _document: &StoredDocument) -> bool {
            !self.unavailable
        }

        async fn share(&self, document: &StoredDocument) -> Result<(), String> {
            if self.broken {
                return Err("share sheet dismissed with error".to_string());
            }
            self.shared.borrow_mut().push(document.encoded.file_name());
            Ok(())
        }
    }

    async fn parcel_id(service: &MemoryService) -> Id {
        let recipient = service
            .create_recipient(&NewRecipient {
                name: "Anna".to_string(),
                address: "Moscow".to_string(),
            })
            .await
            .unwrap();
        service.create_parcel(&recipient.id).await.unwrap().id
    }

    #[tokio::test]
    async fn test_download_store_and_share() {
        let service = MemoryService::new();
        let id = parcel_id(&service).await;
        service.set_document(&id, b"%PDF-1.4 label".to_vec());
        let store = MemoryStore::new();
        let share = FakeShare::default();

        let outcome = download_and_share(&service, &store, &share, &id).await;

        let stored = match outcome {
            ShareOutcome::Shared(stored) => stored,
            other => panic!("expected the label to be shared, got {other:?}"),
        };
        assert_eq!(stored.location, DocumentLocation::Memory);
        assert_eq!(stored.encoded.decode().unwrap().bytes, b"%PDF-1.4 label");
        assert_eq!(*share.shared.borrow(), vec![format!("parcel_{id}.pdf")]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_share_still_stores() {
        let service = MemoryService::new();
        let id = parcel_id(&service).await;
        let store = MemoryStore::new();
        let share = FakeShare {
            unavailable: true,
            ..Default::default()
        };

        let outcome = download_and_share(&service, &store, &share, &id).await;

        assert!(matches!(outcome, ShareOutcome::Unavailable(_)));
        assert!(share.shared.borrow().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_download_is_swallowed() {
        let service = MemoryService::new();
        let store = MemoryStore::new();
        let share = FakeShare::default();

        let outcome = download_and_share(&service, &store, &share, &Id::Number(999)).await;

        assert!(matches!(outcome, ShareOutcome::Failed(_)));
        assert!(store.is_empty());
        assert!(share.shared.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_share_is_reported() {
        let service = MemoryService::new();
        let id = parcel_id(&service).await;
        let store = MemoryStore::new();
        let share = FakeShare {
            broken: true,
            ..Default::default()
        };

        let outcome = download_and_share(&service, &store, &share, &id).await;

        assert_eq!(
            outcome,
            ShareOutcome::Failed("share sheet dismissed with error".to_string())
        );
    }
}
