//! Clipboard and share bindings.
//!
//! Every Dioxus renderer used here (web, Android/iOS webview, desktop webview)
//! runs a JavaScript engine, so both bindings go through [`document::eval`].
//! Desktop and Android webviews lack `navigator.share`; there the stored file
//! goes to the system handler instead.

use dioxus::prelude::*;
use store::StoredDocument;

use crate::flows::clipboard::Clipboard;
use crate::flows::document::ShareTarget;

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

/// Clipboard backed by `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebviewClipboard;

impl Clipboard for WebviewClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        let script = format!(
            "await navigator.clipboard.writeText({}); return true;",
            js_string(text)?
        );
        document::eval(&script)
            .join::<bool>()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

const CAN_SHARE_FILES: &str = r#"
const sample = new File([""], "label.pdf", { type: "application/pdf" });
return !!(navigator.share && navigator.canShare && navigator.canShare({ files: [sample] }));
"#;

async fn webview_can_share() -> bool {
    document::eval(CAN_SHARE_FILES)
        .join::<bool>()
        .await
        .unwrap_or(false)
}

async fn webview_share(stored: &StoredDocument) -> Result<(), String> {
    let encoded = &stored.encoded;
    let script = format!(
        r#"
const bytes = Uint8Array.from(atob({data}), (c) => c.charCodeAt(0));
const file = new File([bytes], {name}, {{ type: {mime} }});
await navigator.share({{ files: [file], title: {name} }});
return true;
"#,
        data = js_string(&encoded.base64)?,
        name = js_string(&encoded.file_name())?,
        mime = js_string(encoded.mime_type())?,
    );
    document::eval(&script)
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
fn share_with_system(stored: &StoredDocument) -> Option<Result<(), String>> {
    let path = stored.path()?;
    Some(open::that(path).map_err(|e| e.to_string()))
}

#[cfg(target_os = "android")]
fn share_with_system(stored: &StoredDocument) -> Option<Result<(), String>> {
    let path = stored.path()?;
    let encoded = &stored.encoded;
    Some(crate::android::share_file(path, encoded.mime_type(), &encoded.file_name()))
}

#[cfg(any(target_arch = "wasm32", target_os = "ios"))]
fn share_with_system(_stored: &StoredDocument) -> Option<Result<(), String>> {
    None
}

/// Desktop opens the file with its default viewer; Android sends an
/// `ACTION_SEND` intent.
const HAS_SYSTEM_SHARE: bool = cfg!(not(any(target_arch = "wasm32", target_os = "ios")));

/// The best share mechanism the current platform offers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlatformShare;

impl ShareTarget for PlatformShare {
    async fn is_available(&self, stored: &StoredDocument) -> bool {
        webview_can_share().await || (HAS_SYSTEM_SHARE && stored.path().is_some())
    }

    async fn share(&self, stored: &StoredDocument) -> Result<(), String> {
        if webview_can_share().await {
            return webview_share(stored).await;
        }
        share_with_system(stored).unwrap_or_else(|| Err("no share target on this platform".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("PRC00000002").unwrap(), r#""PRC00000002""#);
        assert_eq!(js_string(r#"a"b</script>"#).unwrap(), r#""a\"b</script>""#);
    }
}
