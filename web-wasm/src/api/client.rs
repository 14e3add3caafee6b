//! REST APIクライアント（fetch）
//!
//! 各呼び出しは1回だけ試行し、失敗はコンソールに出して `None` / `false` を返す。
//! 認証付きの呼び出しは毎回その時点のトークンを読む。

use futures::FutureExt;
use gloo::console;
use gloo::net::http::{Request, Response};
use portfolio_common::{
    ApiFuture, Category, ClientConfig, Error, LoginRequest, LoginResponse, NewWork, PortfolioApi,
    Result, SessionStore, Work,
};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use super::session_store::WebSessionStore;

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ClientConfig,
    session: WebSessionStore,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

fn network(e: gloo::net::Error) -> Error {
    Error::Network(e.to_string())
}

fn ensure_ok(response: &Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(Error::Status {
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// 失敗をログに出して `Option` にする
fn logged<T>(action: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            console::error!(format!("{}: {}", action, e));
            None
        }
    }
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        let session = WebSessionStore::new(config.token_key.clone());
        Self { config, session }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &WebSessionStore {
        &self.session
    }

    fn bearer(&self) -> Result<String> {
        self.session
            .token()
            .map(|token| format!("Bearer {}", token))
            .ok_or(Error::MissingToken)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = Request::get(&self.config.endpoint(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(network)?;
        ensure_ok(&response)?;
        decode(response).await
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<()> {
        let response = Request::post(&self.config.endpoint("/users/login"))
            .json(&LoginRequest { email, password })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(&response)?;
        let body: LoginResponse = decode(response).await?;
        self.session.set_token(&body.token)
    }

    async fn try_create(&self, work: NewWork<File>) -> Result<Work> {
        let bearer = self.bearer()?;
        let form = FormData::new().map_err(|e| Error::Network(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("image", &work.image, &work.image.name())
            .map_err(|e| Error::Network(format!("{:?}", e)))?;
        for (name, value) in work.text_fields() {
            form.append_with_str(name, value)
                .map_err(|e| Error::Network(format!("{:?}", e)))?;
        }

        let response = Request::post(&self.config.endpoint("/works"))
            .header("Authorization", &bearer)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(&response)?;
        decode(response).await
    }

    async fn try_delete(&self, id: u32) -> Result<()> {
        let bearer = self.bearer()?;
        let response = Request::delete(&self.config.work_endpoint(id))
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(network)?;
        ensure_ok(&response)
    }
}

impl PortfolioApi for HttpApi {
    type Image = File;

    fn fetch_categories(&self) -> ApiFuture<'_, Option<Vec<Category>>> {
        async move { logged("GET /categories", self.get_json("/categories").await) }.boxed_local()
    }

    fn fetch_works(&self) -> ApiFuture<'_, Option<Vec<Work>>> {
        async move { logged("GET /works", self.get_json("/works").await) }.boxed_local()
    }

    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, bool> {
        async move {
            logged("POST /users/login", self.try_login(email, password).await).is_some()
        }
        .boxed_local()
    }

    fn logout(&self) {
        if let Err(e) = self.session.clear() {
            console::error!(format!("logout: {}", e));
        }
    }

    fn create_work(&self, work: NewWork<File>) -> ApiFuture<'_, Option<Work>> {
        async move { logged("POST /works", self.try_create(work).await) }.boxed_local()
    }

    fn delete_work(&self, id: u32) -> ApiFuture<'_, bool> {
        async move {
            let action = format!("DELETE /works/{}", id);
            logged(&action, self.try_delete(id).await).is_some()
        }
        .boxed_local()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_common::SessionMode;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn api(key: &str) -> HttpApi {
        HttpApi::new(ClientConfig {
            token_key: key.to_string(),
            ..Default::default()
        })
    }

    #[wasm_bindgen_test]
    fn test_bearer_requires_token() {
        let api = api("client-test-none");
        api.logout();
        assert!(matches!(api.bearer(), Err(Error::MissingToken)));
        assert_eq!(SessionMode::from_store(api.session()), SessionMode::Public);
    }

    #[wasm_bindgen_test]
    fn test_bearer_reads_token_at_call_time() {
        let api = api("client-test-token");
        api.session().set_token("abc").unwrap();
        assert_eq!(api.bearer().unwrap(), "Bearer abc");
        api.session().set_token("def").unwrap();
        assert_eq!(api.bearer().unwrap(), "Bearer def");
        api.logout();
        assert!(api.bearer().is_err());
    }

    #[wasm_bindgen_test]
    async fn test_delete_without_token_makes_no_request() {
        let api = api("client-test-delete");
        api.logout();
        assert!(!api.delete_work(1).await);
    }
}
