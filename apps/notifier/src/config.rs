//! # Notifier 設定
//!
//! 環境変数から通知ハンドラの設定を読み込む。
//! プロセス起動時に一度だけ読み込み、以後は不変の値として全呼び出しで共有する。

use std::{env, time::Duration};

use tickermail_domain::value_objects::Recipients;

/// Notifier の設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Presigned URL の有効期限
    pub presigned_url_expiry: Duration,
    /// S3 エンドポイント URL（MinIO 使用時に設定、未設定で AWS S3 デフォルト）
    pub s3_endpoint_url:      Option<String>,
    /// 通知設定
    pub notification:         NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `ses`: Amazon SES v2 経由で送信（本番）
/// - `smtp`: Mailpit（開発）/ SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ、既定値）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド（"ses" | "smtp" | "noop"）
    pub backend:      String,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:    String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:    u16,
    /// 送信元メールアドレス
    ///
    /// 空文字は設定漏れの可能性があるが、ここでは検証しない。
    /// 送信時にプロバイダエラーとして顕在化する。
    pub from_address: String,
    /// 宛先メールアドレスリスト（カンマ区切り設定値をパース済み）
    pub recipients:   Recipients,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let expiry_secs: u64 = env::var("PRESIGNED_URL_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .expect("PRESIGNED_URL_EXPIRY は正の整数である必要があります");
        assert!(
            expiry_secs > 0,
            "PRESIGNED_URL_EXPIRY は正の整数である必要があります"
        );

        Self {
            presigned_url_expiry: Duration::from_secs(expiry_secs),
            s3_endpoint_url:      env::var("S3_ENDPOINT_URL").ok(),
            notification:         NotificationConfig::from_env(),
        }
    }
}

impl NotificationConfig {
    /// 環境変数から通知設定を読み込む
    fn from_env() -> Self {
        Self {
            backend:      env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| "noop".to_string()),
            smtp_host:    env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port:    env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            from_address: env::var("NOTIFICATION_FROM_ADDRESS").unwrap_or_default(),
            recipients:   Recipients::parse(
                &env::var("NOTIFICATION_RECIPIENTS").unwrap_or_default(),
            ),
        }
    }
}
