//! # テスト用モック
//!
//! ハンドラ・ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tickermail-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use tickermail_domain::notification::{EmailMessage, NotificationError};

use crate::{error::InfraError, notification::NotificationSender, s3::S3Client};

// ===== MockS3Client =====

/// テスト用のモック S3 クライアント
///
/// 固定の URL を返す。[`failing`](MockS3Client::failing) で生成した場合は
/// 常にエラーを返し、リンク発行失敗時の縮退動作を検証できる。
/// 呼び出し回数を記録する。
#[derive(Clone)]
pub struct MockS3Client {
    presigned_url: Option<String>,
    calls:         Arc<Mutex<usize>>,
}

impl MockS3Client {
    /// 固定 URL を返すモックを作成する
    pub fn new(presigned_url: impl Into<String>) -> Self {
        Self {
            presigned_url: Some(presigned_url.into()),
            calls:         Arc::new(Mutex::new(0)),
        }
    }

    /// 常に発行失敗するモックを作成する
    pub fn failing() -> Self {
        Self {
            presigned_url: None,
            calls:         Arc::new(Mutex::new(0)),
        }
    }

    /// これまでの呼び出し回数を取得する
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl S3Client for MockS3Client {
    async fn presigned_download_url(
        &self,
        _bucket: &str,
        _s3_key: &str,
        _expires_in: Duration,
    ) -> Result<String, InfraError> {
        *self.calls.lock().unwrap() += 1;
        match &self.presigned_url {
            Some(url) => Ok(url.clone()),
            None => Err(InfraError::S3("モック: 発行失敗".to_string())),
        }
    }
}

// ===== MockNotificationSender =====

/// テスト用のモック通知送信
///
/// 送信されたメッセージを記録する。[`failing`](MockNotificationSender::failing)
/// で生成した場合は常に送信失敗を返し、エラー伝播を検証できる。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    fail: bool,
}

impl MockNotificationSender {
    /// 常に送信成功するモックを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗するモックを作成する
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// これまでに送信されたメッセージを取得する
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::SendFailed("モック: 送信失敗".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
