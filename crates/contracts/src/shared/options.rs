use serde::{Deserialize, Serialize};

/// Вариант значения для выпадающего списка фильтра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub code: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Сортировка по подписи без учёта регистра, при равенстве по коду
pub fn sort_by_label(options: &mut [FilterOption]) {
    options.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.code.cmp(&b.code))
    });
}

/// Подпись для кода, которого нет в справочнике: "<Категория> <код>"
pub fn fallback_label(category: &str, code: &str) -> String {
    format!("{} {}", category, code)
}

/// Статический справочник код → подпись.
///
/// Реализуется перечислениями с исчерпывающим `match`, поэтому добавление
/// варианта без подписи не скомпилируется.
pub trait CodeTable: Sized + Copy + 'static {
    /// Название категории для fallback-подписи
    const CATEGORY: &'static str;

    fn all() -> &'static [Self];
    fn code(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }

    fn label_for(code: &str) -> String {
        match Self::from_code(code) {
            Some(v) => v.label().to_string(),
            None => fallback_label(Self::CATEGORY, code),
        }
    }

    fn options() -> Vec<FilterOption> {
        let mut options: Vec<FilterOption> = Self::all()
            .iter()
            .map(|v| FilterOption::new(v.code(), v.label()))
            .collect();
        sort_by_label(&mut options);
        options
    }
}

/// Общие проверки справочника: коды уникальны и `from_code` возвращает тот же вариант.
/// `expected_len` берётся из исчерпывающего `match` в тесте перечисления.
#[cfg(test)]
pub(crate) fn assert_code_table<T: CodeTable + PartialEq + std::fmt::Debug>(expected_len: usize) {
    assert_eq!(T::all().len(), expected_len, "{}: all() misses a variant", T::CATEGORY);
    for v in T::all() {
        assert_eq!(T::from_code(v.code()), Some(*v));
        assert!(!v.label().trim().is_empty());
    }
    let mut codes: Vec<_> = T::all().iter().map(|v| v.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), expected_len, "{}: duplicate code", T::CATEGORY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_label_is_case_insensitive() {
        let mut options = vec![
            FilterOption::new("3", "beta"),
            FilterOption::new("1", "Alfa"),
            FilterOption::new("2", "Gama"),
        ];
        sort_by_label(&mut options);
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Alfa", "beta", "Gama"]);
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(fallback_label("Porte", "07"), "Porte 07");
    }
}
