//! Shared constructors for the API client and label store on all platforms.
//!
//! - **Web** (WASM): built-in config, labels kept in [`store::MemoryStore`]
//! - **Desktop / Mobile** (native): `parcels.toml` + environment, labels written
//!   through [`store::FileStore`] under the app cache directory (on Android the
//!   one `Context.getCacheDir()` reports)

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use store::ParcelsConfig;

/// Resolve the app configuration for this platform.
///
/// Native order: built-in default, then `<config_dir>/parcels/parcels.toml`,
/// then `PARCELS_API_URL` (a `.env` file is loaded first if present).
pub fn load_config() -> ParcelsConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ParcelsConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let config = dirs::config_dir()
            .map(|dir| dir.join("parcels").join(ParcelsConfig::filename()))
            .map(|path| read_config_file(&path))
            .unwrap_or_default();
        config.with_env(|name| std::env::var(name).ok())
    }
}

/// Read a config file, falling back to defaults when it is missing or broken.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_config_file(path: &std::path::Path) -> ParcelsConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => ParcelsConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            ParcelsConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ParcelsConfig::default(),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            ParcelsConfig::default()
        }
    }
}

/// Create the API client every screen talks to.
pub fn make_service() -> api::ApiClient {
    let config = load_config();
    tracing::info!("Using parcel API at {}", config.api.base_url);
    api::ApiClient::from_config(&config)
}

/// Where downloaded labels are kept before they are shared.
#[derive(Clone, Debug)]
pub enum LabelStore {
    #[cfg(not(target_arch = "wasm32"))]
    File(store::FileStore),
    Memory(store::MemoryStore),
}

impl store::DocumentStore for LabelStore {
    async fn save(
        &self,
        document: &store::EncodedDocument,
    ) -> Result<store::StoredDocument, store::StoreError> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            LabelStore::File(files) => files.save(document).await,
            LabelStore::Memory(memory) => memory.save(document).await,
        }
    }
}

/// Create a platform-appropriate store for downloaded labels.
pub fn make_document_store() -> LabelStore {
    #[cfg(target_arch = "wasm32")]
    {
        LabelStore::Memory(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        label_store(label_dir(app_cache_dir()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn label_store(dir: Option<PathBuf>) -> LabelStore {
    match dir {
        Some(dir) => LabelStore::File(store::FileStore::new(dir)),
        None => {
            tracing::warn!("No writable cache directory; labels stay in memory");
            LabelStore::Memory(store::MemoryStore::new())
        }
    }
}

/// `<cache>/parcels`. Outside Android a missing cache directory falls back to
/// the temp directory; Android apps cannot write to `/data/local/tmp`.
#[cfg(not(target_arch = "wasm32"))]
fn label_dir(app_cache: Option<PathBuf>) -> Option<PathBuf> {
    #[cfg(target_os = "android")]
    let base = app_cache;
    #[cfg(not(target_os = "android"))]
    let base = app_cache.or_else(|| Some(std::env::temp_dir()));
    base.map(|dir| dir.join("parcels"))
}

#[cfg(target_os = "android")]
fn app_cache_dir() -> Option<PathBuf> {
    crate::android::cache_dir()
        .map_err(|e| tracing::warn!("Cannot resolve the app cache directory: {}", e))
        .ok()
}

#[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
fn app_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: Option<&str>) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("parcels_config_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(ParcelsConfig::filename());
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        path
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = scratch_file("missing", None);
        assert_eq!(read_config_file(&path), ParcelsConfig::default());
    }

    #[test]
    fn test_file_sets_base_url() {
        let path = scratch_file("valid", Some("[api]\nbase_url = \"http://192.168.1.70:8000\"\n"));
        assert_eq!(read_config_file(&path).api.base_url, "http://192.168.1.70:8000");
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = scratch_file("broken", Some("[api\nbase_url ="));
        assert_eq!(read_config_file(&path), ParcelsConfig::default());
    }

    #[test]
    fn test_labels_go_under_the_app_cache() {
        let cache = PathBuf::from("/data/user/0/com.example.parcels/cache");
        assert_eq!(label_dir(Some(cache.clone())), Some(cache.join("parcels")));
        assert!(matches!(label_store(Some(cache)), LabelStore::File(_)));
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_missing_cache_falls_back_to_temp() {
        assert_eq!(label_dir(None), Some(std::env::temp_dir().join("parcels")));
    }

    #[cfg(target_os = "android")]
    #[test]
    fn test_missing_cache_keeps_labels_in_memory() {
        assert_eq!(label_dir(None), None);
        assert!(matches!(label_store(None), LabelStore::Memory(_)));
    }
}
