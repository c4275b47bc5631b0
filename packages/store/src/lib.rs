pub mod config;
pub mod document;
pub mod error;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

pub use config::{ApiConfig, ParcelsConfig};
pub use document::{Document, DocumentLocation, DocumentStore, EncodedDocument, StoredDocument};
pub use error::StoreError;
