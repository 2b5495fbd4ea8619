use contracts::domain::a001_tender::TenderId;

pub const OVERVIEW: &str = "d400_overview";
pub const TENDERS: &str = "a001_tenders";
pub const TENDER_DETAIL_PREFIX: &str = "a001_tender_detail_";
pub const ESTABLISHMENTS: &str = "a003_establishments";
pub const PROFILE: &str = "sys_profile";
pub const SETTINGS: &str = "sys_settings";

/// "a001_tender_detail_<id>"
pub fn tender_detail(id: TenderId) -> String {
    format!("{}{}", TENDER_DETAIL_PREFIX, id.as_string())
}

/// Ключ карточки лицитации → id; некорректный id → None
pub fn parse_tender_detail(key: &str) -> Option<TenderId> {
    key.strip_prefix(TENDER_DETAIL_PREFIX)
        .and_then(|id| TenderId::from_string(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tender_detail_key() {
        let key = tender_detail(TenderId(42));
        assert_eq!(key, "a001_tender_detail_42");
        assert_eq!(parse_tender_detail(&key), Some(TenderId(42)));
    }

    #[test]
    fn test_invalid_detail_keys() {
        assert_eq!(parse_tender_detail("a001_tender_detail_"), None);
        assert_eq!(parse_tender_detail("a001_tender_detail_abc"), None);
        assert_eq!(parse_tender_detail("a001_tenders"), None);
    }
}
