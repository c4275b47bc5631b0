//! # API crate: typed client for the parcel service
//!
//! Every screen of the app talks to the remote parcel API through the
//! [`ParcelService`] trait defined here. The trait has two implementations:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`ApiClient`] | `reqwest`-backed HTTP client. Never retries; a failed call is returned as-is. |
//! | [`MemoryService`] | In-memory stand-in with the same semantics, used by tests and demos. |
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | `POST` | `/recipient` | [`create_recipient`](ParcelService::create_recipient) |
//! | `GET` | `/recipient/{name}/parcels` | [`recipient_parcels`](ParcelService::recipient_parcels) |
//! | `POST` | `/parcel` | [`create_parcel`](ParcelService::create_parcel) |
//! | `GET` | `/parcel/{trackNumber}` | [`track_parcel`](ParcelService::track_parcel) |
//! | `GET` | `/parcel/pdf/{parcelId}` | [`parcel_pdf`](ParcelService::parcel_pdf) |
//!
//! Path parameters are percent-encoded as single segments. Any non-2xx response
//! becomes [`ApiError::Status`].

use std::future::Future;

mod client;
mod error;
mod memory;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use memory::MemoryService;
pub use models::{Id, NewParcel, NewRecipient, Parcel, Recipient, RecipientRef};

/// Async interface to the remote parcel API.
pub trait ParcelService {
    /// Register a recipient. The returned record carries the server-assigned id.
    fn create_recipient(
        &self,
        recipient: &NewRecipient,
    ) -> impl Future<Output = Result<Recipient, ApiError>>;

    /// All parcels addressed to the recipient with this name.
    fn recipient_parcels(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Parcel>, ApiError>>;

    /// Create a parcel for an existing recipient.
    fn create_parcel(
        &self,
        recipient_id: &Id,
    ) -> impl Future<Output = Result<Parcel, ApiError>>;

    /// Look up a parcel, including its recipient, by tracking number.
    fn track_parcel(
        &self,
        track_number: &str,
    ) -> impl Future<Output = Result<Parcel, ApiError>>;

    /// Raw PDF label for a parcel.
    fn parcel_pdf(
        &self,
        parcel_id: &Id,
    ) -> impl Future<Output = Result<Vec<u8>, ApiError>>;
}
