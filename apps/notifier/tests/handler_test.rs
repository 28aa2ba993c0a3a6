//! ハンドラ統合テスト
//!
//! モックの S3 クライアントと通知送信を注入し、ハンドラの全パスを検証する。

use std::{sync::Arc, time::Duration};

use lambda_runtime::{Context, LambdaEvent};
use pretty_assertions::assert_eq;
use tickermail_domain::value_objects::Recipients;
use tickermail_infra::mock::{MockNotificationSender, MockS3Client};
use tickermail_notifier::{
    event::ObjectCreatedEvent,
    handler::{NotifierState, handle_object_created},
    usecase::{NotificationService, TemplateRenderer},
};

const PRESIGNED_URL: &str =
    "https://reports.s3.ap-northeast-1.amazonaws.com/stock/2026-02-08/analysis_result.pdf";

fn make_event(bucket: &str, key: &str, size: u64) -> LambdaEvent<ObjectCreatedEvent> {
    let payload: ObjectCreatedEvent = serde_json::from_value(serde_json::json!({
        "detail": {
            "bucket": { "name": bucket },
            "object": { "key": key, "size": size }
        }
    }))
    .unwrap();

    LambdaEvent::new(payload, Context::default())
}

fn make_state(
    s3: &MockS3Client,
    sender: &MockNotificationSender,
    recipients: &str,
) -> NotifierState {
    NotifierState {
        s3: Arc::new(s3.clone()),
        notification_service: NotificationService::new(
            Arc::new(sender.clone()),
            TemplateRenderer::new().unwrap(),
            Recipients::parse(recipients),
        ),
        presigned_url_expiry: Duration::from_secs(86400),
    }
}

#[tokio::test]
async fn pdfアップロードで全項目を含むメールを全宛先に送信する() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com,suzuki@example.com");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.pdf", 2_097_152);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        "Email sent for stock/2026-02-08/analysis_result.pdf"
    );

    // 全宛先への 1 回の送信呼び出し
    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].to.as_slice(),
        ["tanaka@example.com", "suzuki@example.com"]
    );

    // 件名・本文に抽出したメタデータが含まれる
    assert_eq!(
        sent[0].subject,
        "[Stock Report] 2026-02-08 大型株テクニカル分析レポート生成完了"
    );
    for body in [&sent[0].html_body, &sent[0].text_body] {
        assert!(body.contains("2026-02-08"));
        assert!(body.contains("analysis_result.pdf"));
        assert!(body.contains("2.0 MB"));
        assert!(body.contains("s3://reports/stock/2026-02-08/analysis_result.pdf"));
    }
    assert!(sent[0].text_body.contains(PRESIGNED_URL));
}

#[tokio::test]
async fn pdf以外のキーはスキップして発行も送信もしない() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.csv", 1024);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Skipped: not a PDF file");
    assert_eq!(s3.call_count(), 0);
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn 大文字拡張子はpdfとして扱わない() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.PDF", 1024);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Skipped: not a PDF file");
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn 宛先未設定なら400を返し発行も送信もしない() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, " , ,, ");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.pdf", 2_097_152);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, "No recipient emails configured");
    assert_eq!(s3.call_count(), 0);
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn リンク発行失敗でもリンクなしのメールを送信する() {
    let s3 = MockS3Client::failing();
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.pdf", 2_097_152);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        "Email sent for stock/2026-02-08/analysis_result.pdf"
    );

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    for body in [&sent[0].html_body, &sent[0].text_body] {
        // CTA ブロックは省略される
        assert!(!body.contains("ダウンロード"));
        // その他の項目は縮退時も含まれる
        assert!(body.contains("2026-02-08"));
        assert!(body.contains("analysis_result.pdf"));
        assert!(body.contains("2.0 MB"));
        assert!(body.contains("s3://reports/stock/2026-02-08/analysis_result.pdf"));
    }
}

#[tokio::test]
async fn 日付セグメントがないキーはunknownとして送信する() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    let event = make_event("reports", "stock/misc/analysis_result.pdf", 512);
    let response = handle_object_created(&state, event).await.unwrap();

    assert_eq!(response.status_code, 200);

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].subject,
        "[Stock Report] Unknown 大型株テクニカル分析レポート生成完了"
    );
    assert!(sent[0].text_body.contains("512 B"));
}

#[tokio::test]
async fn 送信失敗は呼び出しエラーとして伝播する() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::failing();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    let event = make_event("reports", "stock/2026-02-08/analysis_result.pdf", 2_097_152);
    let result = handle_object_created(&state, event).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn 同一イベントの再実行は独立した再送になる() {
    let s3 = MockS3Client::new(PRESIGNED_URL);
    let sender = MockNotificationSender::new();
    let state = make_state(&s3, &sender, "tanaka@example.com");

    for _ in 0..2 {
        let event = make_event("reports", "stock/2026-02-08/analysis_result.pdf", 2_097_152);
        let response = handle_object_created(&state, event).await.unwrap();
        assert_eq!(response.status_code, 200);
    }

    // 重複抑止は行わない。2 回の呼び出しで 2 通送信される
    assert_eq!(sender.sent_emails().len(), 2);
}
