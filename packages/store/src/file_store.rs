//! # Filesystem-backed document store
//!
//! [`FileStore`] decodes a label and writes it as `<base_dir>/parcel_<id>.pdf`
//! so the platform share mechanism can pick up a real file. Files are
//! overwritten on every download.
//!
//! ## Platform cache directories
//!
//! The UI crate picks the base directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Caches/parcels/` |
//! | Linux | `~/.cache/parcels/` |
//! | Windows | `C:\Users\<user>\AppData\Local\parcels\` |
//! | Android | the app's `Context.getCacheDir()`, resolved over JNI |

use std::path::PathBuf;

use crate::document::{DocumentLocation, DocumentStore, EncodedDocument, StoredDocument};
use crate::error::StoreError;

/// Filesystem-backed DocumentStore for desktop and mobile.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn document_path(&self, document: &EncodedDocument) -> PathBuf {
        self.base.join(document.file_name())
    }
}

impl DocumentStore for FileStore {
    async fn save(&self, document: &EncodedDocument) -> Result<StoredDocument, StoreError> {
        let decoded = document.decode()?;
        std::fs::create_dir_all(&self.base)?;
        let path = self.document_path(document);
        std::fs::write(&path, &decoded.bytes)?;
        Ok(StoredDocument {
            encoded: document.clone(),
            location: DocumentLocation::File(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("parcels_test_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_writes_binary_pdf() {
        let dir = scratch_dir("write");
        let store = FileStore::new(dir.clone());

        let bytes = b"%PDF-1.7\n\x00\x01\x02".to_vec();
        let stored = store
            .save(&Document::new("15", bytes.clone()).encode())
            .await
            .unwrap();

        let path = dir.join("parcel_15.pdf");
        assert_eq!(stored.path(), Some(&path));
        // Decoded bytes on disk, not the base64 text.
        assert_eq!(std::fs::read(&path).unwrap(), bytes);

        assert!(!dir.join("parcel_16.pdf").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_file_store_rejects_bad_payload_without_writing() {
        let dir = scratch_dir("bad");
        let store = FileStore::new(dir.clone());

        let bad = EncodedDocument {
            parcel_id: "1".to_string(),
            base64: "***".to_string(),
        };
        assert!(matches!(store.save(&bad).await, Err(StoreError::Decode(_))));
        assert!(!dir.join("parcel_1.pdf").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
