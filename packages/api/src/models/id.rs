use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier.
///
/// The API is not consistent about whether ids are JSON numbers or strings, so
/// the original representation is kept and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_number_and_string() {
        let n: Id = serde_json::from_str("17").unwrap();
        assert_eq!(n, Id::Number(17));
        assert_eq!(n.to_string(), "17");

        let s: Id = serde_json::from_str(r#""6f1c-22""#).unwrap();
        assert_eq!(s, Id::from("6f1c-22"));
        assert_eq!(s.to_string(), "6f1c-22");
    }

    #[test]
    fn test_serializes_in_original_form() {
        assert_eq!(serde_json::to_string(&Id::Number(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Id::from("3")).unwrap(), r#""3""#);
    }
}
