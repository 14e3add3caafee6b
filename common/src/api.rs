//! APIクライアントのインターフェース
//!
//! 失敗はすべて実装側でログに出し、`None` / `false` として返す。
//! 呼び出し側は必ず結果で分岐すること。リトライはしない。

use futures::future::LocalBoxFuture;

use crate::types::{Category, NewWork, Work};

pub type ApiFuture<'a, T> = LocalBoxFuture<'a, T>;

pub trait PortfolioApi {
    /// アップロードする画像の実体（ブラウザでは `web_sys::File`）
    type Image;

    /// `GET /categories`（認証なし）
    fn fetch_categories(&self) -> ApiFuture<'_, Option<Vec<Category>>>;

    /// `GET /works`（認証なし）
    fn fetch_works(&self) -> ApiFuture<'_, Option<Vec<Work>>>;

    /// `POST /users/login`。成功時のみトークンを保存してtrue。
    /// 失敗時は既存のセッションに触れない。
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, bool>;

    /// セッションを消す。サーバーへの通信はしない。
    fn logout(&self);

    /// `POST /works`（multipart、Bearer認証）
    fn create_work(&self, work: NewWork<Self::Image>) -> ApiFuture<'_, Option<Work>>;

    /// `DELETE /works/{id}`（Bearer認証）
    fn delete_work(&self, id: u32) -> ApiFuture<'_, bool>;
}
