//! # ハンドラ
//!
//! S3 Object Created イベントを受けて通知メールを送信するエントリポイント。
//!
//! ## 処理フロー
//!
//! 1. イベントからバケット・キー・サイズを取り出す（必須フィールドの欠落は
//!    デシリアライズ時点で呼び出しエラー）
//! 2. `.pdf` 以外のキーはスキップ（正常系、200）
//! 3. 宛先未設定なら 400 を返し、送信は行わない
//! 4. 分析日抽出 → Presigned URL 発行（失敗時はリンクなしで続行）→
//!    サイズ整形 → レンダリング → 送信
//! 5. `200 / Email sent for <key>` を返す
//!
//! 同一イベントでの再実行は再送となる。重複送信の抑止は行わない。

use std::{sync::Arc, time::Duration};

use lambda_runtime::LambdaEvent;
use tickermail_domain::{
    notification::{DownloadLink, ReportNotification},
    report::ReportKey,
    value_objects::FileSize,
};
use tickermail_infra::s3::S3Client;
use tickermail_shared::HandlerResponse;

use crate::{event::ObjectCreatedEvent, usecase::NotificationService};

/// ハンドラが参照する共有状態
///
/// プロセス起動時に一度構築し、全呼び出しで共有する。構築後は不変。
pub struct NotifierState {
    /// Presigned URL 発行用の S3 クライアント
    pub s3:                   Arc<dyn S3Client>,
    /// 通知メールの生成・送信サービス
    pub notification_service: NotificationService,
    /// Presigned URL の有効期限
    pub presigned_url_expiry: Duration,
}

/// S3 Object Created イベントを処理する
///
/// メール送信の失敗は呼び出しエラーとして伝播する
/// （プラットフォーム側のリトライポリシーに委ねる）。
pub async fn handle_object_created(
    state: &NotifierState,
    event: LambdaEvent<ObjectCreatedEvent>,
) -> Result<HandlerResponse, lambda_runtime::Error> {
    let detail = event.payload.detail;
    let bucket = detail.bucket.name;
    let key = ReportKey::new(detail.object.key);

    // PDF 以外は処理対象外（正常系）
    if !key.is_pdf() {
        tracing::info!(key = %key, "PDF 以外のオブジェクトをスキップ");
        return Ok(HandlerResponse::ok("Skipped: not a PDF file"));
    }

    // 宛先未設定では送信できない（設定エラー）
    if state.notification_service.recipients().is_empty() {
        tracing::error!("宛先メールアドレスが設定されていない");
        return Ok(HandlerResponse::bad_request(
            "No recipient emails configured",
        ));
    }

    // Presigned URL の発行失敗は通知を中断せず、リンクなしで続行する
    let download = match state
        .s3
        .presigned_download_url(&bucket, key.as_str(), state.presigned_url_expiry)
        .await
    {
        Ok(url) => DownloadLink::available(url, state.presigned_url_expiry.as_secs()),
        Err(e) => {
            tracing::error!(error = %e, key = %key, "Presigned URL の発行に失敗");
            DownloadLink::Unavailable
        }
    };

    let notification = ReportNotification {
        analysis_date: key.analysis_date_label().to_string(),
        file_name:     key.file_name().to_string(),
        size:          FileSize::new(detail.object.size),
        storage_uri:   key.storage_uri(&bucket),
        download,
    };

    state.notification_service.notify(&notification).await?;

    Ok(HandlerResponse::ok(format!("Email sent for {key}")))
}
