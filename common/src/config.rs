//! クライアント設定

use serde::{Deserialize, Serialize};

/// ビルド時に `PORTFOLIO_API_BASE` で上書きできるAPIのベースURL
pub const DEFAULT_API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5678/api",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base: String,
    /// セッショントークンを保存するキー
    pub token_key: String,
    pub home_page: String,
    pub login_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            token_key: "token".into(),
            home_page: "index.html".into(),
            login_page: "login.html".into(),
        }
    }
}

impl ClientConfig {
    /// `/works` などのパスから完全なURLを作る
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn work_endpoint(&self, id: u32) -> String {
        self.endpoint(&format!("/works/{}", id))
    }
}
