//! # 通知送信
//!
//! 通知メールの送信バックエンドを提供する。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: 送信手段は [`NotificationSender`] で抽象化し、
//!   ユースケース側はバックエンドの詳細を意識しない
//! - **3 つの実装**: SES（本番）、SMTP（Mailpit 開発用）、Noop（既定）を
//!   `NOTIFICATION_BACKEND` 環境変数でランタイム選択する
//! - **一括送信**: 1 通のメッセージは全宛先に対する 1 回の送信呼び出しで
//!   送る。宛先ごとの呼び出しは行わない

mod noop;
mod ses;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use ses::SesNotificationSender;
pub use smtp::SmtpNotificationSender;
use tickermail_domain::notification::{EmailMessage, NotificationError};

/// メール送信トレイト
///
/// 通知基盤の中核。送信失敗はエラーとして返し、呼び出し元で伝播させる
/// （fire-and-forget にはしない）。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    ///
    /// メッセージの全宛先に対して 1 回の送信呼び出しを行う。
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
