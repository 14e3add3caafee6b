//! localStorageに保存するセッショントークン
//!
//! 値はJSONにせず、トークン文字列をそのまま保存する。

use portfolio_common::{Error, Result, SessionStore};

#[derive(Debug, Clone)]
pub struct WebSessionStore {
    key: String,
}

impl WebSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))
}

impl SessionStore for WebSessionStore {
    fn token(&self) -> Option<String> {
        local_storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        local_storage()?
            .set_item(&self.key, token)
            .map_err(|e| Error::Storage(format!("set_item failed: {:?}", e)))
    }

    fn clear(&self) -> Result<()> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|e| Error::Storage(format!("remove_item failed: {:?}", e)))
    }
}
