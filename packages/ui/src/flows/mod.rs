//! Screen logic that does not depend on Dioxus.
//!
//! Each screen keeps its state in signals, but the decisions (validation,
//! what a failed call turns into, which notice to show) live here so they can
//! be exercised against [`api::MemoryService`] without a renderer.

pub mod clipboard;
pub mod document;
pub mod recipient;
pub mod search;
pub mod tracking;

/// Trim `value` and reject it with `message` if nothing is left.
pub fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err(message)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required("  Anna ", "missing"), Ok("Anna".to_string()));
        assert_eq!(required("", "missing"), Err("missing"));
        assert_eq!(required(" \n\t", "missing"), Err("missing"));
    }
}
