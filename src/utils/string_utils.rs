//! # 문자열 유틸리티
//!
//! 사용자 입력 문자열을 저장/조회 전에 정리하는 함수들입니다.

use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  alice  ", "Username").unwrap(), "alice");
/// assert!(validate_required_string("   ", "Username").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 이메일 주소 정규화 (앞뒤 공백 제거 + 소문자 변환)
///
/// 저장과 조회 모두 같은 규칙을 거쳐야 유니크 인덱스가 의미를 가집니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  alice  ", "Username").unwrap(), "alice");
        assert!(matches!(
            validate_required_string("   ", "Username"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }
}
