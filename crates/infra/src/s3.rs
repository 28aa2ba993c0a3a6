//! # S3 接続管理
//!
//! レポートが保存された S3 バケットへの接続と、ダウンロード用 Presigned URL
//! の発行を行う。
//!
//! ## 設計方針
//!
//! - **受信者は S3 から直接取得**: メールにオブジェクト本体を添付せず、
//!   期限付きのダウンロード URL を記載する。ハンドラは URL 発行のみ
//! - **ローカル開発**: MinIO を使用（`S3_ENDPOINT_URL` で接続先を指定）
//! - **本番環境**: Lambda 実行ロールで Amazon S3 に接続（`S3_ENDPOINT_URL` 未設定）

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{Client, presigning::PresigningConfig};

use crate::InfraError;

/// S3 クライアントのインターフェース
///
/// ダウンロード用 Presigned URL の発行を提供する。テスト時はモックに
/// 差し替え可能。
#[async_trait]
pub trait S3Client: Send + Sync {
    /// ダウンロード用の Presigned GET URL を発行する
    ///
    /// 通知メールの受信者がこの URL に対して HTTP GET でレポートを
    /// 直接ダウンロードする。バケットは受信イベント由来のため、
    /// クライアント構築時ではなく呼び出しごとに受け取る。
    ///
    /// # 引数
    ///
    /// * `bucket` - S3 バケット名
    /// * `s3_key` - S3 オブジェクトキー
    /// * `expires_in` - URL の有効期限
    async fn presigned_download_url(
        &self,
        bucket: &str,
        s3_key: &str,
        expires_in: Duration,
    ) -> Result<String, InfraError>;
}

/// AWS S3 クライアント
///
/// `aws-sdk-s3` を使用した [`S3Client`] の実装。
/// MinIO とも互換動作する。
pub struct AwsS3Client {
    client: Client,
}

impl AwsS3Client {
    /// 新しい S3 クライアントを作成する
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl S3Client for AwsS3Client {
    async fn presigned_download_url(
        &self,
        bucket: &str,
        s3_key: &str,
        expires_in: Duration,
    ) -> Result<String, InfraError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| InfraError::S3(format!("有効期限の指定が不正: {e}")))?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(s3_key)
            .presigned(presigning)
            .await
            .map_err(|e| InfraError::S3(format!("ダウンロード URL の署名に失敗: {e}")))?;

        Ok(request.uri().to_string())
    }
}

/// S3 クライアントを作成する
///
/// `endpoint` に MinIO 等のカスタムエンドポイント URL を渡すとそちらに
/// 接続し、`None` の場合は AWS S3 のデフォルトエンドポイントを使用する。
///
/// 認証情報は SDK のデフォルト認証チェーンで解決する:
/// - ローカル: 環境変数 `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`（`.env` で設定）
/// - 本番: Lambda 実行ロール
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("ap-northeast-1"));

    if let Some(endpoint_url) = endpoint {
        loader = loader.endpoint_url(endpoint_url);
    }

    let shared_config = loader.load().await;

    // MinIO はバーチャルホスト型 URL を解決できないため、
    // カスタムエンドポイント使用時のみパススタイルに切り替える
    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .force_path_style(endpoint.is_some())
        .build();

    Client::from_conf(s3_config)
}
