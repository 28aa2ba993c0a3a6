//! # TickerMail インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートは S3 とメール送信サービスへのアクセスを trait で抽象化し、
//! 外部システムの詳細をカプセル化する。ドメイン層をインフラの変更から
//! 保護する。
//!
//! ## 責務
//!
//! - **S3 接続**: Presigned URL の発行
//! - **メール送信**: SES / SMTP / Noop の送信バックエンド
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。ドメイン層はインフラ層に依存しない
//! （依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`s3`] - S3 接続管理と Presigned URL 生成
//! - [`notification`] - メール通知送信
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用モック（`test-utils` feature）

pub mod error;
pub mod notification;
pub mod s3;

#[cfg(feature = "test-utils")]
pub mod mock;

pub use error::InfraError;
