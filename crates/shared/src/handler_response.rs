//! # ハンドラレスポンス
//!
//! Lambda ハンドラの統一レスポンス形式 `{ "statusCode": 200, "body": "..." }`
//! を提供する。

use serde::{Deserialize, Serialize};

/// ハンドラの統一レスポンス型
///
/// - `200`: 送信完了、または PDF 以外のスキップ（どちらも正常系）
/// - `400`: 宛先未設定（設定エラー、メールは送信しない）
///
/// トリガー契約違反やメール送信失敗はこの型ではなく、呼び出しエラー
/// として伝播する。
///
/// ## 使用例
///
/// ```
/// use tickermail_shared::HandlerResponse;
///
/// let response = HandlerResponse::ok("Email sent for stock/2026-02-08/analysis_result.pdf");
/// assert_eq!(response.status_code, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// HTTP 形式のステータスコード（200 | 400）
    pub status_code: u16,
    /// 人間可読な結果メッセージ
    pub body:        String,
}

impl HandlerResponse {
    /// 200 OK レスポンスを作成する
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body:        body.into(),
        }
    }

    /// 400 Bad Request レスポンスを作成する
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            body:        body.into(),
        }
    }
}
