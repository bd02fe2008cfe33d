//! User-facing strings. The defaults are the Japanese texts the reading pages ship with.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiText {
    pub generating: String,
    pub copy_idle: String,
    pub copy_done: String,
    pub copy_failed: String,
    pub download_label: String,
    /// Prefix for an error the server reported inside a 2xx body.
    pub error_prefix: String,
    /// Prefix for HTTP, transport and decode failures.
    pub failure_prefix: String,
    pub server_fallback: String,
    pub unexpected_response: String,
    pub examples_loading: String,
    pub examples_empty: String,
    pub examples_failed: String,
    pub question_placeholder: String,
    pub badge_placeholder: String,
}

impl Default for UiText {
    fn default() -> Self {
        Self {
            generating: "生成中...".into(),
            copy_idle: "コピー".into(),
            copy_done: "コピーしました".into(),
            copy_failed: "コピー失敗".into(),
            download_label: "ダウンロード".into(),
            error_prefix: "エラー: ".into(),
            failure_prefix: "エラーが発生しました: ".into(),
            server_fallback: "ネットワークまたはサーバーエラーが発生しました".into(),
            unexpected_response: "サーバーの応答形式が不正です".into(),
            examples_loading: "読み込み中...".into(),
            examples_empty: "実例がまだありません。準備中です。".into(),
            examples_failed: "実例の読み込みに失敗しました。".into(),
            question_placeholder: "（ユーザーの質問）".into(),
            badge_placeholder: "Model: —".into(),
        }
    }
}

impl UiText {
    pub fn badge(&self, model: &str) -> String {
        format!("Model: {model}")
    }
}
