//! UIコンポーネント

pub mod editor_modal;
pub mod filter_bar;
pub mod gallery;
pub mod header;
pub mod login_page;
pub mod modal_gallery;
pub mod status_message;
pub mod upload_form;
