//! # Parcel label documents
//!
//! A label is fetched from the API as raw PDF bytes ([`Document`]), re-encoded
//! to base64 ([`EncodedDocument`]) so it can cross the text-only webview
//! bridge, and then handed to a [`DocumentStore`] which keeps
//! it only long enough for the share sheet to pick it up.

use std::future::Future;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::StoreError;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Raw label payload for one parcel.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub parcel_id: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(parcel_id: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            parcel_id: parcel_id.into(),
            bytes,
        }
    }

    /// Re-encode the payload as base64 text.
    pub fn encode(&self) -> EncodedDocument {
        EncodedDocument {
            parcel_id: self.parcel_id.clone(),
            base64: STANDARD.encode(&self.bytes),
        }
    }
}

/// Text-safe form of a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedDocument {
    pub parcel_id: String,
    pub base64: String,
}

impl EncodedDocument {
    /// `parcel_{id}.pdf`, with every id byte outside `[A-Za-z0-9_-]` written
    /// as `%XX`. Distinct ids always get distinct names.
    pub fn file_name(&self) -> String {
        let mut id = String::with_capacity(self.parcel_id.len());
        for b in self.parcel_id.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                id.push(char::from(b));
            } else {
                id.push_str(&format!("%{b:02X}"));
            }
        }
        format!("parcel_{id}.pdf")
    }

    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    pub fn decode(&self) -> Result<Document, StoreError> {
        let bytes = STANDARD.decode(self.base64.as_bytes())?;
        Ok(Document::new(self.parcel_id.clone(), bytes))
    }
}

/// Where a stored document ended up.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentLocation {
    /// Written to the local filesystem.
    File(PathBuf),
    /// Held in memory only (web).
    Memory,
}

/// A document that has been written to transient storage.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredDocument {
    pub encoded: EncodedDocument,
    pub location: DocumentLocation,
}

impl StoredDocument {
    pub fn path(&self) -> Option<&PathBuf> {
        match &self.location {
            DocumentLocation::File(path) => Some(path),
            DocumentLocation::Memory => None,
        }
    }
}

/// Async trait for transient label storage.
pub trait DocumentStore {
    fn save(
        &self,
        document: &EncodedDocument,
    ) -> impl Future<Output = Result<StoredDocument, StoreError>>;
}
