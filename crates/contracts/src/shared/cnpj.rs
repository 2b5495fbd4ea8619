//! Каноническая форма CNPJ: только цифры.
//!
//! Нормализуются обе стороны сравнения: значения при записи в БД и
//! строка поиска перед сопоставлением.

/// "12.345.678/0001-95" → "12345678000195"
pub fn normalize_cnpj(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Цифры для поиска по CNPJ, если строка поиска похожа на фрагмент CNPJ
/// (только цифры и пунктуация маски). "345.678/0" → Some("3456780"), "Padaria 2" → None
pub fn cnpj_search_fragment(term: &str) -> Option<String> {
    let term = term.trim();
    let looks_like_cnpj = term
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-' | ' '));
    let digits = normalize_cnpj(term);
    if looks_like_cnpj && !digits.is_empty() {
        Some(digits)
    } else {
        None
    }
}

/// Корень CNPJ (первые 8 цифр), ключ головной компании
pub fn cnpj_root(normalized: &str) -> Option<&str> {
    if normalized.len() >= 8 && normalized.is_char_boundary(8) {
        Some(&normalized[..8])
    } else {
        None
    }
}

/// "12345678000195" → "12.345.678/0001-95"; прочие строки возвращаются как есть
pub fn format_cnpj(normalized: &str) -> String {
    if normalized.len() != 14 || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return normalized.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &normalized[0..2],
        &normalized[2..5],
        &normalized[5..8],
        &normalized[8..12],
        &normalized[12..14]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_cnpj("12.345.678/0001-95"), "12345678000195");
        assert_eq!(normalize_cnpj(" 345.678 "), "345678");
        assert_eq!(normalize_cnpj("padaria"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_cnpj("12.345.678/0001-95");
        assert_eq!(normalize_cnpj(&once), once);
    }

    #[test]
    fn test_search_fragment() {
        assert_eq!(cnpj_search_fragment("345.678/0").as_deref(), Some("3456780"));
        assert_eq!(cnpj_search_fragment(" 12345 ").as_deref(), Some("12345"));
        assert_eq!(cnpj_search_fragment("Padaria 2"), None);
        assert_eq!(cnpj_search_fragment("./-"), None);
        assert_eq!(cnpj_search_fragment(""), None);
    }

    #[test]
    fn test_format_roundtrip() {
        assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
        assert_eq!(normalize_cnpj(&format_cnpj("12345678000195")), "12345678000195");
        assert_eq!(format_cnpj("123"), "123");
    }

    #[test]
    fn test_root() {
        assert_eq!(cnpj_root("12345678000195"), Some("12345678"));
        assert_eq!(cnpj_root("1234"), None);
    }
}
