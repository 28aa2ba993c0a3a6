//! # 通知サービス
//!
//! テンプレートレンダリング → メール送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **送信失敗は伝播**: レンダリング・送信いずれの失敗もエラーとして
//!   呼び出し元に返し、呼び出し全体を失敗させる（プラットフォーム側の
//!   リトライに委ねる）
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use tickermail_domain::{
    notification::{NotificationError, ReportNotification},
    value_objects::Recipients,
};
use tickermail_infra::notification::NotificationSender;

use super::TemplateRenderer;

/// 通知サービス
///
/// レポートアップロードに伴うメール通知の生成と送信を統合する。
/// 宛先リストは起動時に設定から構築され、全呼び出しで共有される。
pub struct NotificationService {
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    recipients:        Recipients,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        recipients: Recipients,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            recipients,
        }
    }

    /// 設定済みの宛先リストを返す
    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    /// 通知を送信する
    ///
    /// テンプレートレンダリング → メール送信を行う。
    /// 全宛先に対して 1 回の送信呼び出しを行う。
    pub async fn notify(
        &self,
        notification: &ReportNotification,
    ) -> Result<(), NotificationError> {
        let email = self
            .template_renderer
            .render(notification, &self.recipients)?;

        self.sender.send_email(&email).await?;

        tracing::info!(
            recipients = self.recipients.len(),
            subject = %email.subject,
            link_available = notification.download.is_available(),
            "通知メールを送信した"
        );

        Ok(())
    }
}
