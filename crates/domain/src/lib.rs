//! # TickerMail ドメイン層
//!
//! レポート通知のビジネスロジックの中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: `ReportKey`,
//!   `FileSize`, `Recipients`）
//! - **状態の明示化**: リンク発行の成否は例外ではなく `DownloadLink` の
//!   バリアントとして表現する
//! - **ドメインエラー**: 通知送信の失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（S3、メール送信サービス）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`report`] - S3 オブジェクトキーからのメタデータ導出
//! - [`value_objects`] - ファイルサイズ・宛先リストの値オブジェクト
//! - [`notification`] - 通知イベントとメールメッセージのモデル

pub mod notification;
pub mod report;
pub mod value_objects;

pub use notification::NotificationError;
