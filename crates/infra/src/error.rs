//! # インフラ層エラー定義
//!
//! 外部サービスとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **String へのマップ**: AWS SDK のエラー型はジェネリクスが深く
//!   `#[from]` が困難なため、手動で String にマップする

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// 呼び出し元（ハンドラ）がエラー種別に応じて回復するか伝播するかを
/// 判断する。Presigned URL の発行失敗は回復対象で、通知はリンクなしで
/// 続行する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// S3 エラー
    ///
    /// Presigned URL の発行など、S3 への操作で発生するエラー。
    #[error("S3 エラー: {0}")]
    S3(String),
}
