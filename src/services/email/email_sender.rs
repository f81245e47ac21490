//! 인증 코드 메일 발송
//!
//! `RESEND_API_KEY`가 있으면 Resend HTTP API로 보내고, 없으면 코드를 로그로만 남깁니다.
//! 발송 실패는 `AppError::ExternalServiceError`로 돌려주며 상세 응답은 로그에만 기록됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::config::EmailConfig;
use crate::errors::AppError;

/// 인증 메일 제목
pub const VERIFICATION_SUBJECT: &str = "Mystery Message | Verification Code";

/// 인증 코드 메일 발송
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// `email`로 `username`의 인증 코드를 보냅니다.
    ///
    /// # Errors
    ///
    /// 발송 실패 시 `AppError::ExternalServiceError`
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        verify_code: &str,
    ) -> Result<(), AppError>;
}

/// 환경 변수에 따라 발송기를 고릅니다.
///
/// `RESEND_API_KEY`가 있으면 Resend, 없으면 로그 출력.
pub fn email_sender_from_env() -> Arc<dyn EmailSender> {
    match EmailConfig::resend_api_key() {
        Some(api_key) => Arc::new(ResendEmailSender::new(
            api_key,
            EmailConfig::from_address(),
            EmailConfig::api_url(),
        )),
        None => {
            log::warn!("RESEND_API_KEY not set, verification codes will only be logged");
            Arc::new(LogEmailSender)
        }
    }
}

/// 인증 메일 본문 (HTML)
pub fn verification_html(username: &str, verify_code: &str) -> String {
    format!(
        "<h2>Hello {username},</h2>\
         <p>Thank you for registering. Please use the following verification code to complete your registration:</p>\
         <p><strong>{verify_code}</strong></p>\
         <p>This code expires in one hour. If you did not request this code, please ignore this email.</p>"
    )
}

#[derive(Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
}

/// Resend HTTP API 발송기
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_key: String,
    from: String,
    api_url: String,
}

impl ResendEmailSender {
    pub fn new(api_key: String, from: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from,
            api_url,
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        verify_code: &str,
    ) -> Result<(), AppError> {
        let request = ResendEmailRequest {
            from: &self.from,
            to: [email],
            subject: VERIFICATION_SUBJECT,
            html: verification_html(username, verify_code),
        };

        let response = self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to send verification email: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Failed to send verification email ({}): {}", status, error_text
            )));
        }

        log::info!("Verification email sent to {}", email);
        Ok(())
    }
}

/// 개발용 발송기. 메일 대신 인증 코드를 로그로 남깁니다.
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        verify_code: &str,
    ) -> Result<(), AppError> {
        log::info!("📧 Verification code for {} <{}>: {}", username, email, verify_code);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_html_contains_code() {
        let html = verification_html("alice", "482913");
        assert!(html.contains("alice"));
        assert!(html.contains("482913"));
    }

    #[test]
    fn test_resend_request_shape() {
        let request = ResendEmailRequest {
            from: "Mystery Message <onboarding@resend.dev>",
            to: ["alice@example.com"],
            subject: VERIFICATION_SUBJECT,
            html: verification_html("alice", "482913"),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"][0], "alice@example.com");
        assert_eq!(json["subject"], VERIFICATION_SUBJECT);
    }

    #[actix_web::test]
    async fn test_log_sender_always_succeeds() {
        let sender = LogEmailSender;
        assert!(sender.send_verification_email("a@b.co", "alice", "123456").await.is_ok());
    }
}
