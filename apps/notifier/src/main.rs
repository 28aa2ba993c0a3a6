//! # TickerMail Notifier
//!
//! S3 バケットへの PDF レポートアップロードを契機に、ダウンロードリンク付きの
//! 通知メールを送信する Lambda 関数。
//!
//! ## 処理の流れ
//!
//! EventBridge の S3 Object Created イベントを受信し、オブジェクトキーから
//! 分析日・ファイル名を抽出、Presigned GET URL を発行して HTML / テキストの
//! 通知メールを生成し、SES で全宛先に一括送信する。
//!
//! ```text
//! S3 (PutObject) → EventBridge → Notifier → SES → 受信者
//!                                   │
//!                                   └→ S3 (Presigned GET URL 発行)
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFICATION_BACKEND` | No | 送信バックエンド `ses` \| `smtp` \| `noop`（デフォルト: `noop`） |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元メールアドレス（SES で検証済みであること） |
//! | `NOTIFICATION_RECIPIENTS` | No | カンマ区切りの宛先リスト（未設定時は 400 を返す） |
//! | `PRESIGNED_URL_EXPIRY` | No | ダウンロードリンクの有効期限（秒、デフォルト: 86400） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | backend=smtp の接続先（デフォルト: `localhost` / `1025`） |
//! | `S3_ENDPOINT_URL` | No | MinIO 等のカスタムエンドポイント（未設定で AWS S3） |
//! | `LOG_FORMAT` | No | `json` \| `pretty`（デフォルト: `pretty`） |

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tickermail_infra::{
    notification::{
        NoopNotificationSender,
        NotificationSender,
        SesNotificationSender,
        SmtpNotificationSender,
    },
    s3::{self, AwsS3Client, S3Client},
};
use tickermail_notifier::{
    config::{NotificationConfig, NotifierConfig},
    event::ObjectCreatedEvent,
    handler::{self, NotifierState},
    usecase::{NotificationService, TemplateRenderer},
};
use tickermail_shared::observability::{TracingConfig, init_tracing};

/// 設定に応じて通知送信バックエンドを構築する
async fn create_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
    match config.backend.as_str() {
        "ses" => {
            let aws_config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Arc::new(SesNotificationSender::new(
                aws_sdk_sesv2::Client::new(&aws_config),
                config.from_address.clone(),
            ))
        }
        "smtp" => Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            config.from_address.clone(),
        )),
        "noop" => {
            tracing::warn!("noop バックエンドが選択されているため、メールは送信されない");
            Arc::new(NoopNotificationSender)
        }
        other => {
            tracing::warn!(backend = other, "未知の NOTIFICATION_BACKEND、noop を使用する");
            Arc::new(NoopNotificationSender)
        }
    }
}

/// Notifier のエントリーポイント
///
/// AWS クライアントと設定はプロセス起動時に一度だけ構築し、
/// 全呼び出しで共有する。
#[tokio::main]
async fn main() -> Result<(), Error> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("tickermail-notifier");
    let service_name = tracing_config.service_name.clone();
    init_tracing(tracing_config);

    // 設定読み込み
    let config = NotifierConfig::from_env();

    // S3 クライアント（Presigned URL 発行用）
    let s3_client = s3::create_client(config.s3_endpoint_url.as_deref()).await;
    let s3: Arc<dyn S3Client> = Arc::new(AwsS3Client::new(s3_client));

    // 通知送信バックエンドを選択
    let sender = create_sender(&config.notification).await;

    let notification_service = NotificationService::new(
        sender,
        TemplateRenderer::new()?,
        config.notification.recipients.clone(),
    );

    let state = NotifierState {
        s3,
        notification_service,
        presigned_url_expiry: config.presigned_url_expiry,
    };
    let state_ref = &state;

    tracing::info!(
        service = %service_name,
        backend = %config.notification.backend,
        recipients = config.notification.recipients.len(),
        "Notifier を起動した"
    );

    run(service_fn(move |event: LambdaEvent<ObjectCreatedEvent>| {
        let state = state_ref;
        async move { handler::handle_object_created(state, event).await }
    }))
    .await
}
