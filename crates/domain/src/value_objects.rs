//! # 値オブジェクト
//!
//! ファイルサイズと宛先リストの値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ値をラップし、表示・検証ロジックを集約する
//! - **構築時に不変条件を確立**: `Recipients` は空エントリを含まない

use std::fmt;

/// ファイルサイズ（バイト数の値オブジェクト）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSize(u64);

impl FileSize {
    /// バイト数からファイルサイズを作成する
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// バイト数を取得する
    pub fn as_bytes(&self) -> u64 {
        self.0
    }

    /// 人間が読みやすい単位文字列に変換する
    ///
    /// 1024 未満は B、1024² 未満は小数 1 桁の KB、それ以上は小数 1 桁の MB。
    pub fn humanize(&self) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * 1024;

        if self.0 < KIB {
            format!("{} B", self.0)
        } else if self.0 < MIB {
            format!("{:.1} KB", self.0 as f64 / KIB as f64)
        } else {
            format!("{:.1} MB", self.0 as f64 / MIB as f64)
        }
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.humanize())
    }
}

/// 通知の宛先メールアドレスリスト（値オブジェクト）
///
/// カンマ区切りの設定値からパースする。各エントリは前後の空白を除去し、
/// 空のエントリは取り除く。順序は設定値の記載順を保持する。
///
/// アドレス形式の検証はここでは行わない。不正なアドレスは送信時に
/// プロバイダエラーとして顕在化する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// カンマ区切り文字列から宛先リストをパースする
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// 宛先が 1 件もないかどうか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 宛先の件数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 宛先アドレスのスライスを取得する
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 宛先アドレスを順に走査する
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== FileSize =====

    #[rstest]
    #[case(0, "0 B")]
    #[case(1, "1 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.0 KB")]
    #[case(1536, "1.5 KB")]
    #[case(1024 * 1024 - 1, "1024.0 KB")]
    #[case(1024 * 1024, "1.0 MB")]
    #[case(2 * 1024 * 1024, "2.0 MB")]
    #[case(150 * 1024 * 1024, "150.0 MB")]
    fn ファイルサイズの単位変換が正しい(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(FileSize::new(bytes).humanize(), expected);
    }

    #[test]
    fn displayはhumanizeと同じ文字列を出力する() {
        assert_eq!(format!("{}", FileSize::new(2 * 1024 * 1024)), "2.0 MB");
    }

    #[test]
    fn 同じ入力に対して決定的な出力を返す() {
        let size = FileSize::new(1536);
        assert_eq!(size.humanize(), size.humanize());
    }

    // ===== Recipients =====

    #[test]
    fn カンマ区切りの宛先をパースする() {
        let recipients = Recipients::parse("tanaka@example.com,suzuki@example.com");
        assert_eq!(
            recipients.as_slice(),
            ["tanaka@example.com", "suzuki@example.com"]
        );
    }

    #[test]
    fn 各エントリの前後の空白を除去する() {
        let recipients = Recipients::parse(" tanaka@example.com , suzuki@example.com ");
        assert_eq!(
            recipients.as_slice(),
            ["tanaka@example.com", "suzuki@example.com"]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(",")]
    #[case(" , ,, ")]
    fn 空または空白のみの設定値は空リストになる(#[case] raw: &str) {
        assert!(Recipients::parse(raw).is_empty());
    }

    #[test]
    fn 空エントリを除いて順序を保持する() {
        let recipients = Recipients::parse("a@example.com,,b@example.com, ,c@example.com");
        assert_eq!(recipients.len(), 3);
        assert_eq!(
            recipients.iter().collect::<Vec<_>>(),
            ["a@example.com", "b@example.com", "c@example.com"]
        );
    }
}
