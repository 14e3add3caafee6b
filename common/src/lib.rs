//! Portfolio Common Library
//!
//! ギャラリーとWeb(WASM)フロントエンドで共有される型・状態・処理

pub mod types;
pub mod error;
pub mod config;
pub mod message;
pub mod session;
pub mod filter;
pub mod validation;
pub mod api;
pub mod gallery;
pub mod edit;
pub mod auth;

pub use types::{Category, LoginRequest, LoginResponse, NewWork, Work};
pub use error::{Error, Result, ValidationError};
pub use config::ClientConfig;
pub use message::{StatusMessage, Tone};
pub use session::{MemorySessionStore, Page, SessionMode, SessionStore};
pub use filter::{Filter, FilterControl, FilterState};
pub use validation::{check_form, validate_image, SubmitGate, ACCEPTED_IMAGE_TYPES, MAX_IMAGE_BYTES};
pub use api::{ApiFuture, PortfolioApi};
pub use gallery::{load_categories, load_works, GalleryCard, GalleryState, RefreshTicket};
pub use edit::{
    confirm_and_delete, drag_carries_files, upload_work, DeleteOutcome, EditSession,
    ImageCandidate, ImageSource, ImageVerdict, Pane, Preview, UploadDraft, UploadFields,
};
pub use auth::{LoginForm, LoginOutcome};
