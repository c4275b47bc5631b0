use serde::{Deserialize, Serialize};

use super::Id;

/// Body of `POST /recipient`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecipient {
    pub name: String,
    pub address: String,
}

/// A recipient as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipient_body() {
        let body = NewRecipient {
            name: "Anna Petrova".to_string(),
            address: "12 Lenina St\nApt 4".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Anna Petrova", "address": "12 Lenina St\nApt 4" })
        );
    }

    #[test]
    fn test_recipient_with_only_id() {
        let recipient: Recipient = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(recipient.id, Id::Number(9));
        assert!(recipient.name.is_empty());
    }
}
