//! # レポートキー
//!
//! S3 オブジェクトキーからレポートのメタデータを導出する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 例 |
//! |---|------------|-----|
//! | [`ReportKey`] | レポートのオブジェクトキー | `stock/2026-02-08/analysis_result.pdf` |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: キー文字列をラップし、導出ロジックを集約する
//! - **分析日の欠落は正常系**: 日付セグメントが見つからない場合は
//!   `"Unknown"` ラベルを返す。エラーにはしない

use std::fmt;

use chrono::NaiveDate;

/// 分析日が特定できない場合の表示ラベル
pub const UNKNOWN_DATE_LABEL: &str = "Unknown";

/// レポートの S3 オブジェクトキー（値オブジェクト）
///
/// `stock/2026-02-08/analysis_result.pdf` のようなパス形式のキーをラップし、
/// 分析日・表示用ファイル名・ストレージ URI を導出する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportKey(String);

impl ReportKey {
    /// オブジェクトキーからレポートキーを作成する
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// キー文字列への参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// キーが PDF を指すかどうか
    ///
    /// 拡張子 `.pdf` との完全一致で判定する（大文字小文字を区別する）。
    pub fn is_pdf(&self) -> bool {
        self.0.ends_with(".pdf")
    }

    /// キーのパスセグメントから分析日を抽出する
    ///
    /// `YYYY-MM-DD` の暦日としてパースできる最初のセグメントを
    /// そのまま返す。該当セグメントがない場合は `None`。
    pub fn analysis_date(&self) -> Option<&str> {
        self.0
            .split('/')
            .find(|part| NaiveDate::parse_from_str(part, "%Y-%m-%d").is_ok())
    }

    /// 分析日の表示ラベル
    ///
    /// 分析日が特定できない場合は [`UNKNOWN_DATE_LABEL`] を返す。
    pub fn analysis_date_label(&self) -> &str {
        self.analysis_date().unwrap_or(UNKNOWN_DATE_LABEL)
    }

    /// 表示用ファイル名（最後のパスセグメント）
    pub fn file_name(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// `s3://bucket/key` 形式のストレージ URI を組み立てる
    pub fn storage_uri(&self, bucket: &str) -> String {
        format!("s3://{bucket}/{}", self.0)
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("stock/2026-02-08/analysis_result.pdf", Some("2026-02-08"))]
    #[case("2026-02-08/report.pdf", Some("2026-02-08"))]
    #[case("a/b/2025-12-31/c/report.pdf", Some("2025-12-31"))]
    #[case("2026-01-01/2026-02-02/report.pdf", Some("2026-01-01"))]
    #[case("stock/daily/report.pdf", None)]
    #[case("stock/20260208/report.pdf", None)]
    #[case("stock/2026-13-01/report.pdf", None)]
    #[case("stock/2026-02-30/report.pdf", None)]
    #[case("", None)]
    fn 分析日はパース可能な最初のセグメントをそのまま返す(
        #[case] key: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(ReportKey::new(key).analysis_date(), expected);
    }

    #[test]
    fn 分析日が見つからない場合のラベルはunknown() {
        let key = ReportKey::new("stock/daily/report.pdf");
        assert_eq!(key.analysis_date_label(), "Unknown");
    }

    #[test]
    fn 分析日が見つかる場合のラベルはセグメントそのもの() {
        let key = ReportKey::new("stock/2026-02-08/analysis_result.pdf");
        assert_eq!(key.analysis_date_label(), "2026-02-08");
    }

    #[rstest]
    #[case("stock/2026-02-08/analysis_result.pdf", true)]
    #[case("report.pdf", true)]
    #[case("stock/2026-02-08/analysis_result.PDF", false)]
    #[case("stock/2026-02-08/analysis_result.pdf.bak", false)]
    #[case("stock/2026-02-08/analysis_result.csv", false)]
    fn pdf判定は小文字拡張子の完全一致(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(ReportKey::new(key).is_pdf(), expected);
    }

    #[rstest]
    #[case("stock/2026-02-08/analysis_result.pdf", "analysis_result.pdf")]
    #[case("report.pdf", "report.pdf")]
    #[case("a/b/c.pdf", "c.pdf")]
    fn ファイル名は最後のパスセグメント(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(ReportKey::new(key).file_name(), expected);
    }

    #[test]
    fn ストレージuriはs3スキーム形式() {
        let key = ReportKey::new("stock/2026-02-08/analysis_result.pdf");
        assert_eq!(
            key.storage_uri("reports"),
            "s3://reports/stock/2026-02-08/analysis_result.pdf"
        );
    }

    #[test]
    fn displayはキー文字列をそのまま出力する() {
        let key = ReportKey::new("stock/2026-02-08/analysis_result.pdf");
        assert_eq!(format!("{key}"), "stock/2026-02-08/analysis_result.pdf");
    }
}
