//! 画像とフォームのバリデーション
//!
//! ドラッグ&ドロップとファイル選択はどちらも [`validate_image`] を通る。

use crate::error::ValidationError;

/// 画像サイズの上限（この値未満のみ受け付ける）
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// 画像のMIMEタイプとサイズを検証
///
/// # Arguments
/// * `mime` - ブラウザが報告するMIMEタイプ（`File.type`）
/// * `size` - バイト数
///
/// # Returns
/// * `Ok(())` - PNG/JPEGかつ4 MiB未満
/// * `Err(ValidationError)` - 表示用メッセージを持つエラー
pub fn validate_image(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err(ValidationError::UnsupportedType { mime: mime.to_string() });
    }
    if size >= MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge { size });
    }
    Ok(())
}

/// 送信ボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    Enabled,
    Disabled,
}

impl SubmitGate {
    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitGate::Enabled)
    }
}

impl From<bool> for SubmitGate {
    fn from(valid: bool) -> Self {
        if valid {
            SubmitGate::Enabled
        } else {
            SubmitGate::Disabled
        }
    }
}

/// フォームの全フィールドが空でなければtrue
///
/// サーバー側で改めて検証されるので、ここでの結果は送信ボタンの表示にだけ使う。
pub fn check_form<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields.into_iter().all(|(_, value)| !value.is_empty())
}
