//! Даты в числовом формате YYYYMMDD (как в открытых данных CNPJ).

use chrono::{Datelike, NaiveDate};

/// 2021-03-15 → 20210315
pub fn to_compact(date: NaiveDate) -> i64 {
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

/// 20210315 → 2021-03-15; некорректные значения (0, 20211340) → None
pub fn from_compact(value: i64) -> Option<NaiveDate> {
    if value <= 0 {
        return None;
    }
    let year = i32::try_from(value / 10_000).ok()?;
    let month = u32::try_from(value / 100 % 100).ok()?;
    let day = u32::try_from(value % 100).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Формат для карточек: dd/mm/yyyy
pub fn format_compact(value: i64) -> Option<String> {
    from_compact(value).map(|d| d.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_compact() {
        let d = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap();
        assert_eq!(to_compact(d), 20210305);
        assert_eq!(from_compact(20210305), Some(d));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(from_compact(0), None);
        assert_eq!(from_compact(-1), None);
        assert_eq!(from_compact(20211340), None);
    }

    #[test]
    fn test_ordering_is_preserved() {
        let a = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(to_compact(a) < to_compact(b));
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(20050701).as_deref(), Some("01/07/2005"));
    }
}
