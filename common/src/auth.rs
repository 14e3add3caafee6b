//! ログインページの状態

use crate::message::{self, StatusMessage};
use crate::session::SessionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// トップページへ遷移する
    Redirect,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pending: bool,
    error: Option<StatusMessage>,
}

impl LoginForm {
    /// すでにログイン済みならログインページを表示せずに戻る
    pub fn should_skip(mode: SessionMode) -> bool {
        mode.is_edition()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&StatusMessage> {
        self.error.as_ref()
    }

    /// 送信開始。送信中なら `None`。
    pub fn begin(&mut self) -> Option<(String, String)> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some((self.email.clone(), self.password.clone()))
    }

    pub fn finish(&mut self, success: bool) -> LoginOutcome {
        self.pending = false;
        if success {
            self.error = None;
            LoginOutcome::Redirect
        } else {
            self.error = Some(StatusMessage::error(message::LOGIN_FAILURE));
            LoginOutcome::Failed
        }
    }
}
