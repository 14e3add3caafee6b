//! 画面に表示するインラインメッセージ

/// 表示色（赤=エラー、緑=成功）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Error => "red",
            Tone::Success => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    /// `style` 属性にそのまま入れる文字列
    pub fn style(&self) -> String {
        format!("color: {}", self.tone.color())
    }
}

pub const UPLOAD_SUCCESS: &str = "Le projet a bien été envoyé.";
pub const UPLOAD_FAILURE: &str = "Une erreur a eu lieu lors de l'envoi du projet.";
pub const DELETE_PROMPT: &str = "Voulez-vous vraiment supprimer ce projet ?";
pub const DELETE_FAILURE: &str = "La suppression a échoué.";
pub const LOGIN_FAILURE: &str = "Erreur dans l'identifiant ou le mot de passe.";
