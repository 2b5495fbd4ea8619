//! Состояние фильтров списка и арифметика пагинации.
//!
//! `FilterState` общий для всех страниц поиска (справочник компаний, лицитации).
//! Все изменения идут через методы, чтобы номер страницы сбрасывался на 1
//! при любом изменении, кроме самой страницы.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Размер страницы (сетка 3x3 карточек)
pub const PAGE_SIZE: u64 = 9;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Диапазон дат (обе границы включительно, любая может отсутствовать)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Состояние поиска: строка поиска, именованные фильтры, даты, сортировка, страница
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    /// filter name → selected code; пустые значения не хранятся
    #[serde(default)]
    pub field_filters: BTreeMap<String, String>,
    #[serde(default)]
    pub date_range: DateRange,
    pub sort_field: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "first_page")]
    pub page: u64,
}

fn first_page() -> u64 {
    1
}

impl FilterState {
    pub fn new(sort_field: &str, sort_order: SortOrder) -> Self {
        Self {
            search_term: String::new(),
            field_filters: BTreeMap::new(),
            date_range: DateRange::default(),
            sort_field: sort_field.to_string(),
            sort_order,
            page: 1,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search_term != term {
            self.search_term = term;
            self.page = 1;
        }
    }

    /// Установить значение фильтра. Пустая строка снимает фильтр.
    pub fn set_filter(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let changed = if value.trim().is_empty() {
            self.field_filters.remove(name).is_some()
        } else if self.field_filters.get(name) != Some(&value) {
            self.field_filters.insert(name.to_string(), value);
            true
        } else {
            false
        };
        if changed {
            self.page = 1;
        }
    }

    /// Текущее значение фильтра ("" если не задан)
    pub fn filter(&self, name: &str) -> &str {
        self.field_filters.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_date_from(&mut self, from: Option<NaiveDate>) {
        if self.date_range.from != from {
            self.date_range.from = from;
            self.page = 1;
        }
    }

    pub fn set_date_to(&mut self, to: Option<NaiveDate>) {
        if self.date_range.to != to {
            self.date_range.to = to;
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, field: &str, order: SortOrder) {
        if self.sort_field != field || self.sort_order != order {
            self.sort_field = field.to_string();
            self.sort_order = order;
            self.page = 1;
        }
    }

    /// Повторный клик по тому же полю меняет направление, новое поле начинается с ASC
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    /// Единственный метод, который не сбрасывает страницу
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Сброс всех фильтров к состоянию по умолчанию
    pub fn clear(&mut self, default_sort_field: &str, default_sort_order: SortOrder) {
        *self = Self::new(default_sort_field, default_sort_order);
    }

    /// Количество активных условий (для бейджа панели фильтров)
    pub fn active_filter_count(&self) -> usize {
        let mut count = self.field_filters.len();
        if !self.search_term.trim().is_empty() {
            count += 1;
        }
        if self.date_range.from.is_some() {
            count += 1;
        }
        if self.date_range.to.is_some() {
            count += 1;
        }
        count
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.field_filters.values().all(|v| v.trim().is_empty())
            && self.date_range.is_empty()
    }

    /// Смещение для LIMIT/OFFSET: (page - 1) * page_size, с насыщением
    pub fn offset(&self, page_size: u64) -> u64 {
        (self.page.max(1) - 1).saturating_mul(page_size)
    }
}

/// Страница результата: строки после пагинации и общее число совпадений до неё
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
}

impl<T> ResultPage<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

/// totalPages = max(1, ceil(total_count / page_size))
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

pub fn can_go_previous(page: u64) -> bool {
    page > 1
}

pub fn can_go_next(page: u64, total_pages: u64, is_loading: bool) -> bool {
    !is_loading && page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FilterState {
        let mut s = FilterState::new("trade_name", SortOrder::Asc);
        s.set_page(4);
        s
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let mut s = FilterState::new("trade_name", SortOrder::Asc);
        s.set_page(3);
        assert_eq!(s.offset(PAGE_SIZE), 18);
        s.page = 0;
        assert_eq!(s.offset(PAGE_SIZE), 0);
        s.page = u64::MAX;
        assert_eq!(s.offset(PAGE_SIZE), u64::MAX);
    }

    #[test]
    fn test_every_field_change_resets_page() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1);

        let mut s = state();
        s.set_search_term("acme");
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_filter("sector", "6201501");
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_date_from(date);
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_date_to(date);
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_sort("legal_name", SortOrder::Asc);
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_sort("trade_name", SortOrder::Desc);
        assert_eq!(s.page, 1);

        let mut s = state();
        s.toggle_sort("trade_name");
        assert_eq!(s.page, 1);
        assert_eq!(s.sort_order, SortOrder::Desc);

        let mut s = state();
        s.clear("trade_name", SortOrder::Asc);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_unchanged_value_keeps_page() {
        let mut s = state();
        s.set_search_term("");
        s.set_filter("sector", "");
        s.set_sort("trade_name", SortOrder::Asc);
        assert_eq!(s.page, 4);
    }

    #[test]
    fn test_empty_filter_value_removes_filter() {
        let mut s = FilterState::new("trade_name", SortOrder::Asc);
        s.set_filter("state", "SP");
        assert_eq!(s.filter("state"), "SP");
        s.set_filter("state", "");
        assert_eq!(s.filter("state"), "");
        assert!(s.field_filters.is_empty());
        assert!(s.is_unfiltered());
    }

    #[test]
    fn test_set_page_never_below_one() {
        let mut s = FilterState::new("trade_name", SortOrder::Asc);
        s.set_page(0);
        assert_eq!(s.page, 1);
        assert_eq!(s.offset(PAGE_SIZE), 0);
        s.set_page(3);
        assert_eq!(s.offset(PAGE_SIZE), 18);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(20, 9), 3);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let pages = total_pages(20, PAGE_SIZE);
        assert!(!can_go_previous(1));
        assert!(can_go_previous(2));
        assert!(can_go_next(2, pages, false));
        assert!(!can_go_next(3, pages, false));
        assert!(!can_go_next(1, pages, true));
        // после ошибки total_count = 0 → одна страница, обе кнопки выключены
        let pages = total_pages(0, PAGE_SIZE);
        assert!(!can_go_previous(1));
        assert!(!can_go_next(1, pages, false));
    }

    #[test]
    fn test_active_filter_count() {
        let mut s = FilterState::new("trade_name", SortOrder::Asc);
        assert_eq!(s.active_filter_count(), 0);
        s.set_search_term("padaria");
        s.set_filter("state", "MG");
        s.set_date_to(NaiveDate::from_ymd_opt(2021, 12, 31));
        assert_eq!(s.active_filter_count(), 3);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let s: FilterState = serde_json::from_str(r#"{"sort_field":"number"}"#).unwrap();
        assert_eq!(s.page, 1);
        assert_eq!(s.sort_order, SortOrder::Asc);
        assert!(s.is_unfiltered());
    }
}
