//! # 通知
//!
//! レポートアップロード通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **縮退の明示化**: ダウンロードリンクの発行失敗は例外ではなく
//!   [`DownloadLink::Unavailable`] として表現し、レンダリング側で
//!   明示的に分岐させる
//! - **送信失敗は伝播**: 通知送信の失敗は呼び出し全体の失敗とする
//!   （プラットフォーム側のリトライに委ねる）
//! - **テンプレート分離**: 通知イベントとメール生成は分離
//!   （TemplateRenderer は notifier 側）

use thiserror::Error;

use crate::value_objects::{FileSize, Recipients};

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
/// 送信元アドレスは送信実装側が保持する。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス（全宛先に対して 1 回の送信呼び出しを行う）
    pub to:        Recipients,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// ダウンロードリンクの発行結果
///
/// Presigned URL の発行失敗は通知全体を中断せず、リンクなしの
/// 縮退状態として続行する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadLink {
    /// リンク発行に成功
    Available {
        /// Presigned GET URL
        url:         String,
        /// リンクの有効時間（設定秒数を 3600 で整数除算した時間数）
        valid_hours: u64,
    },
    /// リンク発行に失敗（通知はリンクなしで続行する）
    Unavailable,
}

impl DownloadLink {
    /// 設定された有効期限（秒）から発行済みリンクを作成する
    pub fn available(url: impl Into<String>, expiry_secs: u64) -> Self {
        Self::Available {
            url:         url.into(),
            valid_hours: expiry_secs / 3600,
        }
    }

    /// リンクが発行済みかどうか
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// レポートアップロード通知イベント
///
/// 1 回の呼び出しで構築され、レンダリング後に破棄される。構築後は不変。
#[derive(Debug, Clone)]
pub struct ReportNotification {
    /// 分析日（キーから抽出したセグメント、特定できない場合は `"Unknown"`）
    pub analysis_date: String,
    /// 表示用ファイル名
    pub file_name:     String,
    /// ファイルサイズ
    pub size:          FileSize,
    /// `s3://bucket/key` 形式のストレージ URI
    pub storage_uri:   String,
    /// ダウンロードリンクの発行結果
    pub download:      DownloadLink,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(86400, 24)]
    #[case(7200, 2)]
    #[case(3600, 1)]
    #[case(3599, 0)]
    #[case(90000, 25)]
    fn 有効期限の秒数は整数除算で時間数になる(#[case] secs: u64, #[case] hours: u64) {
        let link = DownloadLink::available("https://example.com/report.pdf", secs);
        assert_eq!(
            link,
            DownloadLink::Available {
                url:         "https://example.com/report.pdf".to_string(),
                valid_hours: hours,
            }
        );
    }

    #[test]
    fn 発行済みリンクはis_availableがtrue() {
        assert!(DownloadLink::available("https://example.com", 86400).is_available());
        assert!(!DownloadLink::Unavailable.is_available());
    }
}
