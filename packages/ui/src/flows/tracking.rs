//! Parcel tracking by tracking number.

use api::{Id, Parcel, ParcelService};

use super::required;

pub const TRACK_NUMBER_REQUIRED: &str = "Tracking number is required";

/// What the result card shows.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingResult {
    pub id: Id,
    pub track_number: String,
    pub status: String,
    pub recipient: String,
}

impl From<Parcel> for TrackingResult {
    fn from(parcel: Parcel) -> Self {
        let recipient = parcel.recipient_name().to_string();
        Self {
            id: parcel.id,
            track_number: parcel.track_number,
            status: parcel.status,
            recipient,
        }
    }
}

/// Tracking screen state. A new lookup always replaces the previous outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrackingState {
    #[default]
    Idle,
    Loading,
    Found(TrackingResult),
    Failed(String),
}

impl TrackingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TrackingState::Loading)
    }

    /// Enter `Loading` unless a lookup is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = TrackingState::Loading;
        true
    }

    pub fn result(&self) -> Option<&TrackingResult> {
        match self {
            TrackingState::Found(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TrackingState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub fn validate_track_number(input: &str) -> Result<String, &'static str> {
    required(input, TRACK_NUMBER_REQUIRED)
}

/// Tracking number passed in through navigation, if there is one to look up.
pub fn prefill(param: &str) -> Option<String> {
    validate_track_number(param).ok()
}

/// Look up `track_number` and turn the outcome into the next screen state.
pub async fn track<S: ParcelService>(service: &S, track_number: &str) -> TrackingState {
    match service.track_parcel(track_number).await {
        Ok(parcel) => TrackingState::Found(parcel.into()),
        Err(e) => {
            tracing::warn!("Tracking lookup for {} failed: {}", track_number, e);
            TrackingState::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryService, NewRecipient};

    async fn seeded() -> (MemoryService, String) {
        let service = MemoryService::new();
        let recipient = service
            .create_recipient(&NewRecipient {
                name: "Anna Petrova".to_string(),
                address: "Moscow".to_string(),
            })
            .await
            .unwrap();
        let parcel = service.create_parcel(&recipient.id).await.unwrap();
        (service, parcel.track_number)
    }

    #[test]
    fn test_validate_track_number() {
        assert_eq!(validate_track_number(""), Err(TRACK_NUMBER_REQUIRED));
        assert_eq!(validate_track_number("   "), Err(TRACK_NUMBER_REQUIRED));
        assert_eq!(validate_track_number(" RU1 "), Ok("RU1".to_string()));
    }

    #[test]
    fn test_prefill() {
        assert_eq!(prefill(""), None);
        assert_eq!(prefill("PRC00000002"), Some("PRC00000002".to_string()));
    }

    #[tokio::test]
    async fn test_known_number_is_verbatim() {
        let (service, track_number) = seeded().await;
        service.set_status(&track_number, "Out for delivery (courier #7)");

        let state = track(&service, &track_number).await;
        let result = state.result().unwrap();
        assert_eq!(result.track_number, track_number);
        assert_eq!(result.status, "Out for delivery (courier #7)");
        assert_eq!(result.recipient, "Anna Petrova");
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_unknown_number_replaces_previous_result() {
        let (service, track_number) = seeded().await;

        let mut state = track(&service, &track_number).await;
        assert!(state.result().is_some());

        state = track(&service, "UNKNOWN").await;
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some("request failed with status code 404"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_missing_recipient_renders_empty_name() {
        let parcel = Parcel {
            id: Id::Number(1),
            track_number: "RU1".to_string(),
            status: "Sorting".to_string(),
            recipient: None,
        };
        let result = TrackingResult::from(parcel);
        assert_eq!(result.recipient, "");
        assert_eq!(result.status, "Sorting");
    }

    #[tokio::test]
    async fn test_dot_tracking_number_is_inline_error() {
        let service = api::ApiClient::new("http://localhost:8000");
        let state = track(&service, "..").await;
        assert_eq!(state.error(), Some(r#"invalid path parameter "..""#));
        assert!(state.result().is_none());
    }

    #[test]
    fn test_second_begin_is_refused_while_loading() {
        let mut state = TrackingState::default();
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.begin());

        state = TrackingState::Failed("offline".to_string());
        assert!(state.begin());
    }
}
