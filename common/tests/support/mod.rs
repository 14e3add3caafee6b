//! テスト用のインメモリAPI

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use futures::FutureExt;
use portfolio_common::{
    ApiFuture, Category, MemorySessionStore, NewWork, PortfolioApi, SessionStore, Work,
};

pub const EMAIL: &str = "sophie.bluel@test.tld";
pub const PASSWORD: &str = "S0phie";
pub const TOKEN: &str = "token-123";

/// テスト用の画像（ブラウザのFileの代わり）
#[derive(Debug, Clone)]
pub struct FakeImage {
    pub name: String,
}

#[derive(Default)]
pub struct FakeApi {
    pub store: MemorySessionStore,
    pub categories: Option<Vec<Category>>,
    pub works: RefCell<Vec<Work>>,
    pub fail_works: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fail_delete: Cell<bool>,
    pub delete_calls: RefCell<Vec<u32>>,
    pub uploaded: RefCell<Vec<(String, String, String)>>,
    pub next_id: Cell<u32>,
}

impl FakeApi {
    pub fn seeded() -> Self {
        let api = Self {
            categories: Some(vec![
                Category { id: 1, name: "Objets".into() },
                Category { id: 2, name: "Appartements".into() },
                Category { id: 3, name: "Hotels & restaurants".into() },
            ]),
            ..Default::default()
        };
        api.works.replace(vec![
            work(1, "Abajour Tahina", 1),
            work(2, "Appartement Paris V", 2),
            work(3, "Restaurant Sushisen - Londres", 3),
            work(4, "La Balisiere - Paris", 2),
        ]);
        api.next_id.set(5);
        api
    }

    pub fn logged_in() -> Self {
        let api = Self::seeded();
        api.store.set_token(TOKEN).unwrap();
        api
    }

    /// サーバー側の認証チェック（リクエスト時点のトークンを見る）
    fn authorized(&self) -> bool {
        self.store.token().as_deref() == Some(TOKEN)
    }
}

pub fn work(id: u32, title: &str, category_id: u32) -> Work {
    Work {
        id,
        title: title.to_string(),
        image_url: format!("http://localhost:5678/images/{}.png", id),
        category_id,
    }
}

impl PortfolioApi for FakeApi {
    type Image = FakeImage;

    fn fetch_categories(&self) -> ApiFuture<'_, Option<Vec<Category>>> {
        let categories = self.categories.clone();
        async move { categories }.boxed_local()
    }

    fn fetch_works(&self) -> ApiFuture<'_, Option<Vec<Work>>> {
        async move {
            if self.fail_works.get() {
                None
            } else {
                Some(self.works.borrow().clone())
            }
        }
        .boxed_local()
    }

    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, bool> {
        async move {
            if email == EMAIL && password == PASSWORD {
                self.store.set_token(TOKEN).is_ok()
            } else {
                false
            }
        }
        .boxed_local()
    }

    fn logout(&self) {
        let _ = self.store.clear();
    }

    fn create_work(&self, new_work: NewWork<FakeImage>) -> ApiFuture<'_, Option<Work>> {
        async move {
            if !self.authorized() || self.fail_create.get() {
                return None;
            }
            let category_id = new_work.category.parse().ok()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let created = work(id, &new_work.title, category_id);
            self.uploaded.borrow_mut().push((
                new_work.image.name.clone(),
                new_work.title.clone(),
                new_work.category.clone(),
            ));
            self.works.borrow_mut().push(created.clone());
            Some(created)
        }
        .boxed_local()
    }

    fn delete_work(&self, id: u32) -> ApiFuture<'_, bool> {
        async move {
            self.delete_calls.borrow_mut().push(id);
            if !self.authorized() || self.fail_delete.get() {
                return false;
            }
            let mut works = self.works.borrow_mut();
            let before = works.len();
            works.retain(|w| w.id != id);
            works.len() < before
        }
        .boxed_local()
    }
}
