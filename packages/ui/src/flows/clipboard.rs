//! Copying tracking numbers from the search results.

use std::future::Future;

pub const COPIED_NOTICE: &str = "Tracking number copied to clipboard";

/// Async access to the system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), String>>;
}

/// Put `track_number` on the clipboard, then show the confirmation notice.
///
/// The notice is shown even when the write fails; the failure is only logged.
pub async fn copy_tracking_number<C: Clipboard>(
    clipboard: &C,
    track_number: &str,
    notify: impl FnOnce(&'static str),
) {
    if let Err(e) = clipboard.write_text(track_number).await {
        tracing::warn!("Failed to copy {} to clipboard: {}", track_number, e);
    }
    notify(COPIED_NOTICE);
}
