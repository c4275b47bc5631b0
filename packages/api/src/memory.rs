use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ApiError;
use crate::models::{Id, NewRecipient, Parcel, Recipient, RecipientRef};
use crate::ParcelService;

/// Status given to freshly created parcels.
pub const CREATED_STATUS: &str = "Created";

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    recipients: Vec<Recipient>,
    parcels: Vec<(Id, Parcel)>,
    documents: HashMap<Id, Vec<u8>>,
    offline: bool,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory ParcelService for testing and offline demos.
///
/// Mirrors the server's behaviour closely enough for the screen flows:
/// unknown tracking numbers and parcel ids are 404s, and
/// [`set_offline`](Self::set_offline) makes every call fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryService {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn guard(&self) -> Result<MutexGuard<'_, MemoryState>, ApiError> {
        let state = self.state();
        if state.offline {
            return Err(ApiError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        Ok(state)
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Change the status reported for a tracking number.
    pub fn set_status(&self, track_number: &str, status: &str) -> bool {
        let mut state = self.state();
        match state
            .parcels
            .iter_mut()
            .find(|(_, p)| p.track_number == track_number)
        {
            Some((_, parcel)) => {
                parcel.status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace the label served for a parcel.
    pub fn set_document(&self, parcel_id: &Id, bytes: Vec<u8>) {
        self.state().documents.insert(parcel_id.clone(), bytes);
    }

    pub fn parcel_count(&self) -> usize {
        self.state().parcels.len()
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("{what} not found"),
    }
}

impl ParcelService for MemoryService {
    async fn create_recipient(&self, recipient: &NewRecipient) -> Result<Recipient, ApiError> {
        let mut state = self.guard()?;
        let created = Recipient {
            id: Id::Number(state.next_id()),
            name: recipient.name.clone(),
            address: recipient.address.clone(),
        };
        state.recipients.push(created.clone());
        Ok(created)
    }

    async fn recipient_parcels(&self, name: &str) -> Result<Vec<Parcel>, ApiError> {
        let state = self.guard()?;
        let ids: Vec<&Id> = state
            .recipients
            .iter()
            .filter(|r| r.name == name)
            .map(|r| &r.id)
            .collect();
        Ok(state
            .parcels
            .iter()
            .filter(|(owner, _)| ids.contains(&owner))
            .map(|(_, parcel)| Parcel {
                recipient: None,
                ..parcel.clone()
            })
            .collect())
    }

    async fn create_parcel(&self, recipient_id: &Id) -> Result<Parcel, ApiError> {
        let mut state = self.guard()?;
        let recipient = state
            .recipients
            .iter()
            .find(|r| &r.id == recipient_id)
            .cloned()
            .ok_or_else(|| not_found("recipient"))?;
        let n = state.next_id();
        let parcel = Parcel {
            id: Id::Number(n),
            track_number: format!("PRC{n:08}"),
            status: CREATED_STATUS.to_string(),
            recipient: Some(RecipientRef {
                name: recipient.name,
            }),
        };
        let label = format!("%PDF-1.4\n% label {}\n%%EOF\n", parcel.track_number);
        state.documents.insert(parcel.id.clone(), label.into_bytes());
        state.parcels.push((recipient_id.clone(), parcel.clone()));
        Ok(Parcel {
            recipient: None,
            ..parcel
        })
    }

    async fn track_parcel(&self, track_number: &str) -> Result<Parcel, ApiError> {
        let state = self.guard()?;
        state
            .parcels
            .iter()
            .find(|(_, p)| p.track_number == track_number)
            .map(|(_, p)| p.clone())
            .ok_or_else(|| not_found("parcel"))
    }

    async fn parcel_pdf(&self, parcel_id: &Id) -> Result<Vec<u8>, ApiError> {
        let state = self.guard()?;
        state
            .documents
            .get(parcel_id)
            .cloned()
            .ok_or_else(|| not_found("document"))
    }
}
