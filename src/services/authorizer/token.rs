/*
 * Responsibility
 * - Authorization ヘッダ値から Bearer トークンを取り出す
 *
 * Notes
 * - API Gateway のバリデーションで `Bearer XXXXXX` 形式は担保されているので、
 *   スキームの再チェックはしない。2 番目のフィールドが無い・空の場合のみ None。
 */

/// Returns the second space-separated field of `Bearer <token>`.
pub fn extract_bearer(authorization: &str) -> Option<&str> {
    authorization
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::extract_bearer;

    #[test]
    fn takes_second_field() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
        assert_eq!(
            extract_bearer("Bearer eyJhbGciOiJIUzI1NiJ9.e30.sig"),
            Some("eyJhbGciOiJIUzI1NiJ9.e30.sig")
        );
    }

    #[test]
    fn scheme_is_not_rechecked() {
        assert_eq!(extract_bearer("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("Token abc"), Some("abc"));
    }

    #[test]
    fn trailing_fields_are_ignored() {
        assert_eq!(extract_bearer("Bearer abc def"), Some("abc"));
    }

    #[test]
    fn missing_or_empty_token() {
        assert_eq!(extract_bearer("Bearer"), None);
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer(""), None);
        assert_eq!(extract_bearer("Bearer  abc"), None);
    }
}
