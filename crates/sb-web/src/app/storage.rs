use serde::{Deserialize, Serialize};

/// Thin wrapper over the browser's localStorage.
///
/// On non-web builds every operation is a no-op returning `None`/`Ok`, which
/// keeps the session plumbing compilable (and testable through its pure
/// encode/decode half) without a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    /// Get a value from storage by key.
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok()??;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    web_sys::console::warn_2(
                        &format!("Failed to get item from storage: {}", key).into(),
                        &e,
                    );
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    /// Set a value in storage.
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
            let storage = window
                .local_storage()
                .map_err(|e| format!("{:?}", e))?
                .ok_or_else(|| "Storage not available".to_string())?;

            storage.set_item(key, value).map_err(|e| {
                let err_msg = format!("Failed to set item in storage '{}': {:?}", key, e);
                web_sys::console::warn_1(&err_msg.clone().into());
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Remove a value from storage.
    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
            let storage = window
                .local_storage()
                .map_err(|e| format!("{:?}", e))?
                .ok_or_else(|| "Storage not available".to_string())?;

            storage.remove_item(key).map_err(|e| {
                let err_msg = format!("Failed to remove item from storage '{}': {:?}", key, e);
                web_sys::console::warn_1(&err_msg.clone().into());
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Get and deserialize a JSON value from storage.
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse JSON from storage");
                None
            }
        }
    }

    /// Serialize and set a JSON value in storage.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json =
            serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }
}
