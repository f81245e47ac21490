//! `validator` 크레이트와 함께 쓰는 커스텀 검증 함수 모음

use validator::{ValidationError, ValidationErrors};

/// 검증 에러에서 사람이 읽을 수 있는 메시지를 모읍니다.
///
/// 메시지가 없는 에러는 `필드: 코드` 형태로 대체하며,
/// 응답이 매번 같은 순서가 되도록 필드명 기준으로 정렬합니다.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect()
}

/// 사용자명 문자 검증 (영문, 숫자, 언더스코어만 허용)
pub fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("Username must not contain special characters".into()));
    }
    Ok(())
}

/// 인증 코드 검증 (숫자 6자리)
pub fn validate_verify_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_code")
            .with_message("Verification code must be 6 digits".into()));
    }
    Ok(())
}
