//! APIとやり取りするデータ型
//!
//! - Category: フィルタ用のカテゴリ
//! - Work: ギャラリーに表示する作品
//! - LoginRequest / LoginResponse: ログインAPIの入出力
//! - NewWork: 作品アップロードのフォーム内容

use serde::{Deserialize, Serialize};

/// カテゴリ（取得後は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// 作品
///
/// APIは `category` オブジェクトや `userId` も返すが、クライアントでは使わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category_id: u32,
}

/// `POST /users/login` のリクエストボディ
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /users/login` のレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// アップロードする作品（multipartの `image` / `title` / `category`）
///
/// 画像の実体はプラットフォームごとに異なるので型パラメータにしている。
#[derive(Debug, Clone)]
pub struct NewWork<I> {
    pub title: String,
    pub category: String,
    pub image: I,
}

impl<I> NewWork<I> {
    /// multipartのテキストフィールド（画像以外）
    pub fn text_fields(&self) -> [(&'static str, &str); 2] {
        [("title", self.title.as_str()), ("category", self.category.as_str())]
    }
}
