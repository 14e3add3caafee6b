//! 編集モーダルの状態（ペイン＋アップロードフォーム）と削除・アップロード処理
//!
//! 状態遷移:
//! - ペイン: Gallery ⇄ AddPhoto（開くと常にGallery）
//! - フォーム: 入力・画像が変わるたびに Valid / Invalid を再計算
//! - 送信は Valid の時だけ。成功するとフォームを空にしてGalleryへ戻る

use crate::api::PortfolioApi;
use crate::error::ValidationError;
use crate::message::{self, StatusMessage, Tone};
use crate::types::{NewWork, Work};
use crate::validation::{check_form, validate_image, SubmitGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Gallery,
    AddPhoto,
}

/// 画像の入力元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Drop,
    Picker,
}

/// 検証前の画像のメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// ドロップゾーンに表示するプレビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageVerdict {
    /// 受け付けた。差し替えで不要になったプレビューURLを返す。
    Accepted { released_preview: Option<String> },
    /// 拒否した。`clear_input` ならファイル入力を空にする。
    Rejected { error: ValidationError, clear_input: bool },
    /// 複数ファイルまたはファイルなしのドロップ。何も変えない。
    Ignored,
}

/// ドラッグ中の項目にファイルが含まれるか
///
/// `kinds` は `DataTransferItem.kind` の並び。ファイル以外（テキスト等）の
/// ドラッグではブラウザの既定動作を止めない。
pub fn drag_carries_files<'a, I>(kinds: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    kinds.into_iter().any(|kind| kind == "file")
}

/// アップロードフォームの下書き（保存しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    /// `<select>` の値。未選択は空文字。
    pub category: String,
    pub image_name: Option<String>,
}

impl UploadDraft {
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("image", self.image_name.as_deref().unwrap_or("")),
            ("title", self.title.as_str()),
            ("category", self.category.as_str()),
        ]
    }

    pub fn is_complete(&self) -> bool {
        check_form(self.fields())
    }
}

/// 送信時に取り出すテキストフィールド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFields {
    pub title: String,
    pub category: String,
}

impl UploadFields {
    pub fn into_new_work<I>(self, image: I) -> NewWork<I> {
        NewWork {
            title: self.title,
            category: self.category,
            image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    modal_open: bool,
    pane: Pane,
    draft: UploadDraft,
    preview: Option<Preview>,
    gate: SubmitGate,
    submitting: bool,
    upload_message: Option<StatusMessage>,
    delete_message: Option<StatusMessage>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            modal_open: false,
            pane: Pane::Gallery,
            draft: UploadDraft::default(),
            preview: None,
            gate: SubmitGate::Disabled,
            submitting: false,
            upload_message: None,
            delete_message: None,
        }
    }
}

impl EditSession {
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn submit_gate(&self) -> SubmitGate {
        self.gate
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn upload_message(&self) -> Option<&StatusMessage> {
        self.upload_message.as_ref()
    }

    pub fn delete_message(&self) -> Option<&StatusMessage> {
        self.delete_message.as_ref()
    }

    /// ギャラリーペインに出すアップロードの結果（成功時のみ）
    pub fn gallery_notice(&self) -> Option<&StatusMessage> {
        self.upload_message
            .as_ref()
            .filter(|msg| msg.tone == Tone::Success)
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
        self.pane = Pane::Gallery;
    }

    /// 閉じるボタンまたは背景クリック
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn show_add_photo(&mut self) {
        self.pane = Pane::AddPhoto;
    }

    pub fn back(&mut self) {
        self.pane = Pane::Gallery;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
        self.recompute();
    }

    pub fn set_category(&mut self, category: String) {
        self.draft.category = category;
        self.recompute();
    }

    /// 画像を検証して受け付ける
    ///
    /// 拒否した場合、既存のプレビューは残す。ファイル選択からの拒否だけは
    /// 選択自体を取り消し、無効なファイルが送信されないようにする。
    /// `make_preview` は受け付けた時だけ呼ばれる。プレビューを作れなかった
    /// 場合は古いプレビューも外し、表示と送信する画像を食い違わせない。
    pub fn offer_image<F>(
        &mut self,
        source: ImageSource,
        candidate: &ImageCandidate,
        make_preview: F,
    ) -> ImageVerdict
    where
        F: FnOnce() -> Option<String>,
    {
        if let Err(error) = validate_image(&candidate.mime, candidate.size) {
            self.upload_message = Some(StatusMessage::error(error.to_string()));
            let clear_input = source == ImageSource::Picker;
            if clear_input {
                self.draft.image_name = None;
                self.recompute();
            }
            return ImageVerdict::Rejected { error, clear_input };
        }

        let new_preview = make_preview().map(|url| Preview {
            url,
            alt: candidate.name.clone(),
        });
        let released_preview = std::mem::replace(&mut self.preview, new_preview).map(|p| p.url);
        self.draft.image_name = Some(candidate.name.clone());
        self.upload_message = None;
        self.recompute();
        ImageVerdict::Accepted { released_preview }
    }

    /// ドロップゾーンへのドロップ。ちょうど1ファイルの時だけ検証に回す。
    pub fn offer_drop<F>(&mut self, dropped: &[ImageCandidate], make_preview: F) -> ImageVerdict
    where
        F: FnOnce() -> Option<String>,
    {
        match dropped {
            [candidate] => self.offer_image(ImageSource::Drop, candidate, make_preview),
            _ => ImageVerdict::Ignored,
        }
    }

    /// ファイル選択がキャンセルされた（入力が空になった）
    pub fn clear_image(&mut self) {
        self.draft.image_name = None;
        self.recompute();
    }

    /// 送信開始。フォームが有効で送信中でない時だけフィールドを返す。
    pub fn begin_submit(&mut self) -> Option<UploadFields> {
        self.recompute();
        if self.submitting || !self.gate.is_enabled() {
            return None;
        }
        self.submitting = true;
        Some(UploadFields {
            title: self.draft.title.clone(),
            category: self.draft.category.clone(),
        })
    }

    /// 送信結果の反映
    ///
    /// 成功時は入力とプレビューを消してギャラリーペインへ戻り、
    /// 不要になったプレビューURLを返す。失敗時は入力をそのまま残す。
    pub fn finish_submit(&mut self, created: Option<&Work>) -> Option<String> {
        self.submitting = false;
        if created.is_none() {
            self.upload_message = Some(StatusMessage::error(message::UPLOAD_FAILURE));
            return None;
        }

        self.draft = UploadDraft::default();
        let released = self.preview.take().map(|p| p.url);
        self.recompute();
        self.pane = Pane::Gallery;
        self.upload_message = Some(StatusMessage::success(message::UPLOAD_SUCCESS));
        released
    }

    pub fn finish_delete(&mut self, outcome: DeleteOutcome) {
        match outcome {
            DeleteOutcome::Cancelled => {}
            DeleteOutcome::Deleted => self.delete_message = None,
            DeleteOutcome::Failed => {
                self.delete_message = Some(StatusMessage::error(message::DELETE_FAILURE))
            }
        }
    }

    fn recompute(&mut self) {
        self.gate = SubmitGate::from(self.draft.is_complete());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// ユーザーが確認を拒否した（APIは呼ばれていない）
    Cancelled,
    Deleted,
    Failed,
}

impl DeleteOutcome {
    /// ギャラリーの再描画が必要か
    pub fn needs_refresh(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// 確認してから削除する
///
/// `confirm` がfalseを返した場合、APIは呼ばない。
pub async fn confirm_and_delete<A, C>(api: &A, id: u32, confirm: C) -> DeleteOutcome
where
    A: PortfolioApi + ?Sized,
    C: FnOnce(&str) -> bool,
{
    if !confirm(message::DELETE_PROMPT) {
        return DeleteOutcome::Cancelled;
    }
    if api.delete_work(id).await {
        DeleteOutcome::Deleted
    } else {
        DeleteOutcome::Failed
    }
}

/// フォームの内容と画像で作品を作成
pub async fn upload_work<A>(api: &A, fields: UploadFields, image: A::Image) -> Option<Work>
where
    A: PortfolioApi + ?Sized,
{
    api.create_work(fields.into_new_work(image)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn png(name: &str, size: u64) -> ImageCandidate {
        ImageCandidate {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size,
        }
    }

    fn text_file() -> ImageCandidate {
        ImageCandidate {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
            size: 12,
        }
    }

    fn filled_session() -> EditSession {
        let mut session = EditSession::default();
        session.open_modal();
        session.show_add_photo();
        session.offer_image(ImageSource::Drop, &png("a.png", MIB), || Some("blob:a".into()));
        session.set_title("Villa".into());
        session.set_category("2".into());
        session
    }

    #[test]
    fn test_modal_navigation() {
        let mut session = EditSession::default();
        assert!(!session.is_modal_open());

        session.open_modal();
        assert!(session.is_modal_open());
        assert_eq!(session.pane(), Pane::Gallery);

        session.show_add_photo();
        assert_eq!(session.pane(), Pane::AddPhoto);
        session.back();
        assert_eq!(session.pane(), Pane::Gallery);

        session.show_add_photo();
        session.close_modal();
        session.open_modal();
        assert_eq!(session.pane(), Pane::Gallery);
    }

    #[test]
    fn test_gate_follows_every_field() {
        let mut session = EditSession::default();
        assert_eq!(session.submit_gate(), SubmitGate::Disabled);

        session.set_title("Villa".into());
        session.set_category("1".into());
        assert_eq!(session.submit_gate(), SubmitGate::Disabled);

        session.offer_image(ImageSource::Picker, &png("a.png", MIB), || Some("blob:a".into()));
        assert_eq!(session.submit_gate(), SubmitGate::Enabled);

        session.set_title(String::new());
        assert_eq!(session.submit_gate(), SubmitGate::Disabled);
    }

    #[test]
    fn test_drop_rejection_keeps_previous_image() {
        let mut session = filled_session();
        let verdict = session.offer_image(ImageSource::Drop, &text_file(), || {
            panic!("rejected images must not create a preview")
        });

        assert!(matches!(
            verdict,
            ImageVerdict::Rejected { clear_input: false, .. }
        ));
        assert_eq!(session.draft().image_name.as_deref(), Some("a.png"));
        assert_eq!(session.preview().map(|p| p.url.as_str()), Some("blob:a"));
        assert!(session.submit_gate().is_enabled());
        let msg = session.upload_message().unwrap();
        assert_eq!(msg.text, "Veuillez envoyer une image au format JPG ou PNG.");
        assert_eq!(msg.tone.color(), "red");
    }

    #[test]
    fn test_picker_rejection_clears_selection() {
        let mut session = filled_session();
        let verdict = session.offer_image(ImageSource::Picker, &png("big.png", 5 * MIB), || None);

        assert!(matches!(
            verdict,
            ImageVerdict::Rejected { error: ValidationError::TooLarge { .. }, clear_input: true }
        ));
        assert_eq!(session.draft().image_name, None);
        assert_eq!(session.preview().map(|p| p.url.as_str()), Some("blob:a"));
        assert!(!session.submit_gate().is_enabled());
    }

    #[test]
    fn test_replacing_image_releases_old_preview() {
        let mut session = filled_session();
        let verdict = session.offer_image(ImageSource::Drop, &png("b.png", MIB), || Some("blob:b".into()));
        assert_eq!(
            verdict,
            ImageVerdict::Accepted { released_preview: Some("blob:a".into()) }
        );
        assert_eq!(session.preview().unwrap().alt, "b.png");
    }

    #[test]
    fn test_accepted_image_without_preview_drops_old_preview() {
        let mut session = filled_session();
        let verdict = session.offer_image(ImageSource::Drop, &png("b.png", MIB), || None);

        assert_eq!(
            verdict,
            ImageVerdict::Accepted { released_preview: Some("blob:a".into()) }
        );
        assert_eq!(session.draft().image_name.as_deref(), Some("b.png"));
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_drop_needs_exactly_one_file() {
        let mut session = filled_session();

        let verdict = session.offer_drop(&[], || panic!("empty drop must not create a preview"));
        assert_eq!(verdict, ImageVerdict::Ignored);

        let two = [png("b.png", MIB), png("c.png", MIB)];
        let verdict = session.offer_drop(&two, || panic!("multi-file drop must not create a preview"));
        assert_eq!(verdict, ImageVerdict::Ignored);
        assert_eq!(session.draft().image_name.as_deref(), Some("a.png"));
        assert_eq!(session.preview().map(|p| p.url.as_str()), Some("blob:a"));

        let verdict = session.offer_drop(&[png("b.png", MIB)], || Some("blob:b".into()));
        assert_eq!(
            verdict,
            ImageVerdict::Accepted { released_preview: Some("blob:a".into()) }
        );
        assert_eq!(session.draft().image_name.as_deref(), Some("b.png"));
    }

    #[test]
    fn test_single_rejected_drop_keeps_input() {
        let mut session = filled_session();
        let verdict = session.offer_drop(&[text_file()], || None);
        assert!(matches!(
            verdict,
            ImageVerdict::Rejected { clear_input: false, .. }
        ));
    }

    #[test]
    fn test_drag_carries_files() {
        assert!(drag_carries_files(["file"]));
        assert!(drag_carries_files(["string", "file"]));
        assert!(!drag_carries_files(["string"]));
        assert!(!drag_carries_files(Vec::<&str>::new()));
    }

    #[test]
    fn test_gallery_notice_only_shows_success() {
        let mut session = filled_session();
        session.offer_image(ImageSource::Drop, &text_file(), || None);
        session.back();
        assert!(session.upload_message().is_some());
        assert_eq!(session.gallery_notice(), None);

        session.begin_submit().unwrap();
        let work = Work {
            id: 12,
            title: "Villa".into(),
            image_url: "x.png".into(),
            category_id: 2,
        };
        session.finish_submit(Some(&work));
        assert_eq!(session.gallery_notice().unwrap().text, message::UPLOAD_SUCCESS);
    }

    #[test]
    fn test_submit_only_from_valid_form() {
        let mut session = EditSession::default();
        session.set_title("Villa".into());
        assert_eq!(session.begin_submit(), None);
        assert!(!session.is_submitting());

        let mut session = filled_session();
        let fields = session.begin_submit().unwrap();
        assert_eq!(fields.title, "Villa");
        assert_eq!(fields.category, "2");
        assert!(session.is_submitting());
        // 二重送信は無視
        assert_eq!(session.begin_submit(), None);
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut session = filled_session();
        session.begin_submit().unwrap();
        let work = Work {
            id: 12,
            title: "Villa".into(),
            image_url: "x.png".into(),
            category_id: 2,
        };
        let released = session.finish_submit(Some(&work));

        assert_eq!(released.as_deref(), Some("blob:a"));
        assert_eq!(session.draft(), &UploadDraft::default());
        assert!(session.preview().is_none());
        assert_eq!(session.submit_gate(), SubmitGate::Disabled);
        assert_eq!(session.pane(), Pane::Gallery);
        assert!(!session.is_submitting());
        let msg = session.upload_message().unwrap();
        assert_eq!(msg.text, message::UPLOAD_SUCCESS);
        assert_eq!(msg.tone.color(), "green");
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut session = filled_session();
        session.begin_submit().unwrap();
        assert_eq!(session.finish_submit(None), None);

        assert_eq!(session.draft().title, "Villa");
        assert_eq!(session.draft().category, "2");
        assert!(session.preview().is_some());
        assert_eq!(session.pane(), Pane::AddPhoto);
        assert!(session.submit_gate().is_enabled());
        assert_eq!(session.upload_message().unwrap().text, message::UPLOAD_FAILURE);
    }

    #[test]
    fn test_clear_image_invalidates_form() {
        let mut session = filled_session();
        session.clear_image();
        assert_eq!(session.draft().image_name, None);
        assert!(!session.submit_gate().is_enabled());
        assert!(session.preview().is_some());
    }

    #[test]
    fn test_finish_delete_messages() {
        let mut session = EditSession::default();
        session.finish_delete(DeleteOutcome::Failed);
        assert_eq!(session.delete_message().unwrap().text, message::DELETE_FAILURE);
        session.finish_delete(DeleteOutcome::Cancelled);
        assert!(session.delete_message().is_some());
        session.finish_delete(DeleteOutcome::Deleted);
        assert!(session.delete_message().is_none());
    }
}
