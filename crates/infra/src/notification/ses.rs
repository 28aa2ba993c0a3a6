//! SES 通知送信実装
//!
//! AWS SES v2 API でレポート通知メールを送信する。
//! Lambda 実行ロールの権限で認証するため、本番環境では追加の資格情報は不要。

use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    types::{Body, Content, Destination, EmailContent, Message},
};
use tickermail_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SES 通知送信
///
/// 宛先リスト全体を 1 つの `Destination` に詰め、SendEmail を 1 回だけ
/// 呼び出す。宛先ごとの送信は行わない。
pub struct SesNotificationSender {
    client:       Client,
    from_address: String,
}

impl SesNotificationSender {
    /// 新しい SES 送信インスタンスを作成
    ///
    /// `from_address` には SES で検証済みのアドレスを指定する。
    pub fn new(client: Client, from_address: String) -> Self {
        Self {
            client,
            from_address,
        }
    }
}

/// UTF-8 指定の SES Content を構築する
///
/// 件名・本文に日本語を含むため、charset は常に UTF-8 を明示する。
fn utf8_content(label: &str, data: &str) -> Result<Content, NotificationError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| NotificationError::SendFailed(format!("{label}の構築に失敗: {e}")))
}

#[async_trait]
impl NotificationSender for SesNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.iter().map(String::from).collect()))
            .build();

        let body = Body::builder()
            .text(utf8_content("テキスト本文", &email.text_body)?)
            .html(utf8_content("HTML 本文", &email.html_body)?)
            .build();

        let message = Message::builder()
            .subject(utf8_content("件名", &email.subject)?)
            .body(body)
            .build();

        self.client
            .send_email()
            .from_email_address(&self.from_address)
            .destination(destination)
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SES 送信失敗: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SesNotificationSender>();
    }

    #[test]
    fn contentはutf8指定で構築される() {
        let content = utf8_content("件名", "テスト").unwrap();
        assert_eq!(content.charset(), Some("UTF-8"));
    }
}
