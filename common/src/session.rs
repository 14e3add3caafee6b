//! セッショントークンの保存先とページ判定

use std::cell::RefCell;

use crate::error::Result;

/// トークンを保持するキー・バリュー領域（ブラウザではlocalStorage）
///
/// トークンの有効性はサーバーだけが判断する。ここでは有無しか見ない。
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// メモリ上のセッション領域（テスト・非ブラウザ環境用）
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// 描画モード。ページ読み込み時に一度だけ決め、描画関数へ引数で渡す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Public,
    /// 編集モード（アップロード・削除が使える）
    Edition,
}

impl SessionMode {
    pub fn from_store<S: SessionStore + ?Sized>(store: &S) -> Self {
        match store.token() {
            Some(token) if !token.is_empty() => SessionMode::Edition,
            _ => SessionMode::Public,
        }
    }

    pub fn is_edition(&self) -> bool {
        matches!(self, SessionMode::Edition)
    }
}

/// ひとつのWASMバンドルを共有する2つのページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
}

impl Page {
    /// `location.pathname` からページを判定
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("login.html") {
            Page::Login
        } else {
            Page::Home
        }
    }
}
