//! Parcel search by recipient name.

use api::{Id, Parcel, ParcelService};

use super::required;

pub const RECIPIENT_NAME_REQUIRED: &str = "Recipient name is required";

/// One row of the result list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParcelRow {
    pub id: Id,
    pub track_number: String,
    pub status: String,
}

impl From<Parcel> for ParcelRow {
    fn from(parcel: Parcel) -> Self {
        Self {
            id: parcel.id,
            track_number: parcel.track_number,
            status: parcel.status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Results(Vec<ParcelRow>),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Enter `Loading` unless a search is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = SearchState::Loading;
        true
    }

    /// A search finished and found nothing.
    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchState::Results(rows) if rows.is_empty())
    }

    pub fn rows(&self) -> &[ParcelRow] {
        match self {
            SearchState::Results(rows) => rows,
            _ => &[],
        }
    }
}

pub fn validate_recipient_name(input: &str) -> Result<String, &'static str> {
    required(input, RECIPIENT_NAME_REQUIRED)
}

/// Fetch the recipient's parcels. A failed lookup is shown as an empty list.
pub async fn search<S: ParcelService>(service: &S, recipient_name: &str) -> SearchState {
    match service.recipient_parcels(recipient_name).await {
        Ok(parcels) => SearchState::Results(parcels.into_iter().map(ParcelRow::from).collect()),
        Err(e) => {
            tracing::warn!("Parcel search for {:?} failed: {}", recipient_name, e);
            SearchState::Results(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryService, NewRecipient};

    #[test]
    fn test_validate_recipient_name() {
        assert_eq!(validate_recipient_name(""), Err(RECIPIENT_NAME_REQUIRED));
        assert_eq!(validate_recipient_name(" Anna "), Ok("Anna".to_string()));
    }

    #[test]
    fn test_idle_is_not_no_results() {
        assert!(!SearchState::Idle.is_no_results());
        assert!(!SearchState::Loading.is_no_results());
        assert!(SearchState::Loading.is_loading());
        assert!(SearchState::Idle.rows().is_empty());
    }

    #[tokio::test]
    async fn test_recipient_without_parcels_is_no_results() {
        let service = MemoryService::new();
        service
            .create_recipient(&NewRecipient {
                name: "Anna".to_string(),
                address: "Moscow".to_string(),
            })
            .await
            .unwrap();

        let state = search(&service, "Anna").await;
        assert!(state.is_no_results());
    }

    #[tokio::test]
    async fn test_rejected_lookup_is_empty_result_set() {
        let service = MemoryService::new();
        service.set_offline(true);

        let state = search(&service, "Anna").await;
        assert_eq!(state, SearchState::Results(Vec::new()));
        assert!(state.is_no_results());
    }

    #[tokio::test]
    async fn test_rows_carry_tracking_number_and_status() {
        let service = MemoryService::new();
        let recipient = service
            .create_recipient(&NewRecipient {
                name: "Anna".to_string(),
                address: "Moscow".to_string(),
            })
            .await
            .unwrap();
        let first = service.create_parcel(&recipient.id).await.unwrap();
        let second = service.create_parcel(&recipient.id).await.unwrap();
        service.set_status(&second.track_number, "Delivered");

        let state = search(&service, "Anna").await;
        let rows = state.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].track_number, first.track_number);
        assert_eq!(rows[0].id, first.id);
        assert_eq!(rows[1].status, "Delivered");
        assert!(!state.is_no_results());
    }

    #[tokio::test]
    async fn test_dot_name_is_no_results() {
        let service = api::ApiClient::new("http://localhost:8000");
        assert!(search(&service, ".").await.is_no_results());
        assert!(search(&service, "..").await.is_no_results());
    }

    #[test]
    fn test_second_begin_is_refused_while_loading() {
        let mut state = SearchState::default();
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.begin());

        state = SearchState::Results(Vec::new());
        assert!(state.begin());
    }
}
