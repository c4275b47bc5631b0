use serde::{Deserialize, Serialize};

use super::Id;

/// Body of `POST /parcel`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewParcel {
    pub recipient_id: Id,
}

/// Recipient summary embedded in a tracked parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecipientRef {
    #[serde(default)]
    pub name: String,
}

/// A parcel as returned by any of the parcel endpoints.
///
/// `status` and `recipient` are not present on every response: the creation
/// response and the per-recipient listing omit the recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: Id,
    pub track_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub recipient: Option<RecipientRef>,
}

impl Parcel {
    /// Recipient name, or an empty string when the response did not include one.
    pub fn recipient_name(&self) -> &str {
        self.recipient.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }
}
