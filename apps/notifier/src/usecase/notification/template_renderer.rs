//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `[Stock Report] {分析日} 大型株テクニカル分析レポート生成完了`
//! - **縮退表示**: ダウンロード URL が発行できなかった場合、テキスト・HTML とも
//!   ダウンロード CTA ブロックごと省略する。その他の項目は常に両形式に含まれる

use tera::{Context, Tera};
use tickermail_domain::{
    notification::{DownloadLink, EmailMessage, NotificationError, ReportNotification},
    value_objects::Recipients,
};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、[`ReportNotification`] から
/// [`EmailMessage`] を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "report_uploaded.html",
                    include_str!("../../../templates/notifications/report_uploaded.html"),
                ),
                (
                    "report_uploaded.txt",
                    include_str!("../../../templates/notifications/report_uploaded.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知イベントからメールメッセージを生成する
    ///
    /// テキスト本文と HTML 本文は同じ項目（分析日・ファイル名・サイズ・
    /// ストレージ URI・ダウンロードリンク）を含む。
    ///
    /// # 引数
    ///
    /// - `notification`: レポートアップロード通知イベント
    /// - `recipients`: 送信先メールアドレスリスト
    pub fn render(
        &self,
        notification: &ReportNotification,
        recipients: &Recipients,
    ) -> Result<EmailMessage, NotificationError> {
        let subject = format!(
            "[Stock Report] {} 大型株テクニカル分析レポート生成完了",
            notification.analysis_date
        );

        let (download_url, valid_hours) = match &notification.download {
            DownloadLink::Available { url, valid_hours } => {
                (Some(url.as_str()), Some(*valid_hours))
            }
            DownloadLink::Unavailable => (None, None),
        };

        let mut context = Context::new();
        context.insert("analysis_date", &notification.analysis_date);
        context.insert("file_name", &notification.file_name);
        context.insert("file_size", &notification.size.humanize());
        context.insert("storage_uri", &notification.storage_uri);
        context.insert("download_url", &download_url);
        context.insert("valid_hours", &valid_hours);

        let html_body = self
            .engine
            .render("report_uploaded.html", &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render("report_uploaded.txt", &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: recipients.clone(),
            subject,
            html_body,
            text_body,
        })
    }
}
