//! エラー型定義

use thiserror::Error;

/// APIクライアント内部のエラー型
///
/// クライアントの境界でログ出力され、呼び出し側には `Option` / `bool` として渡る。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Response status: {status}")]
    Status { status: u16 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No session token")]
    MissingToken,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 画像バリデーションのエラー
///
/// 表示文言をそのまま持つ。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Veuillez envoyer une image au format JPG ou PNG.")]
    UnsupportedType { mime: String },

    #[error("Votre image doit faire moins de 4 Mo.")]
    TooLarge { size: u64 },
}
