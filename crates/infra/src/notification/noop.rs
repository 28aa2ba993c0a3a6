//! Noop 通知送信実装
//!
//! 送信は行わず、宛先件数と件名をログに残すだけの実装。
//! `NOTIFICATION_BACKEND` 未設定の環境での既定バックエンド。

use async_trait::async_trait;
use tickermail_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            recipients = email.to.len(),
            subject = %email.subject,
            "noop バックエンドのためメール送信を行わない"
        );
        Ok(())
    }
}
