//! HTTP implementation of [`ParcelService`].

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use store::ParcelsConfig;

use crate::error::ApiError;
use crate::models::{Id, NewParcel, NewRecipient, Parcel, Recipient};
use crate::ParcelService;

/// Stateless client for the parcel API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ParcelsConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `segments` onto the base URL, percent-encoding each one.
    ///
    /// Empty and dot segments are rejected: URL normalisation would drop them
    /// and the request would reach a different endpoint.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| matches!(s.trim(), "" | "." | "..")) {
            return Err(ApiError::InvalidSegment(bad.to_string()));
        }
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        decode(check(response).await?).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        decode(check(response).await?).await
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl ParcelService for ApiClient {
    async fn create_recipient(&self, recipient: &NewRecipient) -> Result<Recipient, ApiError> {
        let created: Recipient = self.post_json(&["recipient"], recipient).await?;
        tracing::info!("Created recipient {}", created.id);
        Ok(created)
    }

    async fn recipient_parcels(&self, name: &str) -> Result<Vec<Parcel>, ApiError> {
        self.get_json(&["recipient", name, "parcels"]).await
    }

    async fn create_parcel(&self, recipient_id: &Id) -> Result<Parcel, ApiError> {
        let body = NewParcel {
            recipient_id: recipient_id.clone(),
        };
        let created: Parcel = self.post_json(&["parcel"], &body).await?;
        tracing::info!("Created parcel {} for recipient {}", created.track_number, recipient_id);
        Ok(created)
    }

    async fn track_parcel(&self, track_number: &str) -> Result<Parcel, ApiError> {
        self.get_json(&["parcel", track_number]).await
    }

    async fn parcel_pdf(&self, parcel_id: &Id) -> Result<Vec<u8>, ApiError> {
        let id = parcel_id.to_string();
        let url = self.endpoint(&["parcel", "pdf", &id])?;
        tracing::debug!("GET {}", url);
        let response = check(self.http.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ApiClient::new("http://192.168.1.70:8000");
        assert_eq!(
            client.endpoint(&["parcel", "pdf", "12"]).unwrap().as_str(),
            "http://192.168.1.70:8000/parcel/pdf/12"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = ApiClient::new("https://example.com/api/");
        assert_eq!(
            client.endpoint(&["recipient"]).unwrap().as_str(),
            "https://example.com/api/recipient"
        );
    }

    #[test]
    fn test_endpoint_encodes_user_input() {
        let client = ApiClient::new("http://localhost:8000");
        let url = client.endpoint(&["recipient", "Anna Petrova/2", "parcels"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/recipient/Anna%20Petrova%2F2/parcels");
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let client = ApiClient::new("http://localhost:8000");
        for name in [".", "..", " .. ", ""] {
            assert!(matches!(
                client.endpoint(&["recipient", name, "parcels"]),
                Err(ApiError::InvalidSegment(_))
            ));
        }
        // Dots inside a name are ordinary characters.
        let url = client.endpoint(&["recipient", "A. Petrova", "parcels"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/recipient/A.%20Petrova/parcels");
    }

    #[tokio::test]
    async fn test_dot_tracking_number_never_hits_the_network() {
        let client = ApiClient::new("http://localhost:8000");
        assert!(matches!(
            client.track_parcel("..").await,
            Err(ApiError::InvalidSegment(_))
        ));
        assert!(matches!(
            client.recipient_parcels(".").await,
            Err(ApiError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let client = ApiClient::new("not a url");
        let err = client.endpoint(&["parcel"]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));

        let client = ApiClient::new("mailto:ops@example.com");
        assert!(matches!(
            client.endpoint(&["parcel"]),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_from_config() {
        let client = ApiClient::from_config(&ParcelsConfig::new("http://10.0.2.2:8000"));
        assert_eq!(client.base_url(), "http://10.0.2.2:8000");
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_every_call() {
        let client = ApiClient::new("");
        assert!(matches!(
            client.track_parcel("RU1").await,
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            client.parcel_pdf(&Id::Number(1)).await,
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }
}
