//! Состояние области результатов и защита от устаревших ответов.
//!
//! Каждый запрос получает номер поколения. Ответ применяется только если его
//! поколение совпадает с последним выданным, более старые отбрасываются.

use super::search::{total_pages, ResultPage};

/// Три взаимоисключающих состояния области результатов
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView<T> {
    Loading,
    Empty,
    Populated(Vec<T>),
}

impl<T> ResultView<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            ResultView::Empty
        } else {
            ResultView::Populated(rows)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultView::Loading)
    }
}

/// Итог применения ответа
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<E> {
    Applied,
    /// Ответ применён как пустой результат, ошибку нужно показать пользователю
    Failed(E),
    /// Ответ устарел и отброшен
    Stale,
}

/// Сессия поиска одной страницы
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession<T> {
    generation: u64,
    view: ResultView<T>,
    total_count: u64,
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            view: ResultView::Loading,
            total_count: 0,
        }
    }
}

impl<T> SearchSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать новый запрос: состояние сразу переходит в Loading
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.view = ResultView::Loading;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Применить ответ запроса `generation`
    pub fn complete<E>(&mut self, generation: u64, result: Result<ResultPage<T>, E>) -> Completion<E> {
        if !self.is_current(generation) {
            return Completion::Stale;
        }
        match result {
            Ok(page) => {
                self.total_count = page.total_count;
                self.view = ResultView::from_rows(page.rows);
                Completion::Applied
            }
            Err(e) => {
                self.total_count = 0;
                self.view = ResultView::Empty;
                Completion::Failed(e)
            }
        }
    }

    pub fn view(&self) -> &ResultView<T> {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self, page_size: u64) -> u64 {
        total_pages(self.total_count, page_size)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: Vec<&'static str>, total: u64) -> Result<ResultPage<&'static str>, String> {
        Ok(ResultPage {
            rows,
            total_count: total,
        })
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut session = SearchSession::new();
        let g = session.begin();
        assert!(session.is_loading());
        assert_eq!(session.complete(g, page(vec!["a"], 1)), Completion::Applied);
        assert_eq!(session.view(), &ResultView::Populated(vec!["a"]));

        session.begin();
        assert!(session.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = SearchSession::new();
        let first = session.begin();
        let second = session.begin();

        assert_eq!(session.complete(second, page(vec!["new"], 1)), Completion::Applied);
        assert_eq!(session.complete(first, page(vec!["old"], 50)), Completion::Stale);

        assert_eq!(session.view(), &ResultView::Populated(vec!["new"]));
        assert_eq!(session.total_count(), 1);
    }

    #[test]
    fn test_stale_response_does_not_leave_loading() {
        let mut session = SearchSession::new();
        let first = session.begin();
        let _second = session.begin();
        assert_eq!(session.complete(first, page(vec!["old"], 1)), Completion::Stale);
        assert!(session.is_loading());
    }

    #[test]
    fn test_failure_degrades_to_empty() {
        let mut session = SearchSession::new();
        let g = session.begin();
        session.complete(g, page(vec!["a", "b"], 20));
        assert_eq!(session.total_pages(9), 3);

        let g = session.begin();
        let result: Result<ResultPage<&str>, String> = Err("network".to_string());
        assert_eq!(session.complete(g, result), Completion::Failed("network".to_string()));
        assert_eq!(session.view(), &ResultView::Empty);
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.total_pages(9), 1);
    }

    #[test]
    fn test_zero_rows_is_empty() {
        let mut session: SearchSession<&str> = SearchSession::new();
        let g = session.begin();
        session.complete(g, page(vec![], 0));
        assert_eq!(session.view(), &ResultView::Empty);
    }
}
