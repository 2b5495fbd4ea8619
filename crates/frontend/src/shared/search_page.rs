//! Связка состояния фильтров и сессии поиска для страниц-списков.
//!
//! Любое фактическое изменение `FilterState` запускает новый запрос.
//! Ответ применяется только если его поколение последнее (`SearchSession`).

use contracts::shared::result_view::{Completion, SearchSession};
use contracts::shared::search::{FilterState, ResultPage, PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::loading::LoadingStore;
use crate::shared::notifications::NotificationStore;

pub struct SearchPage<T: Send + Sync + 'static> {
    pub state: RwSignal<FilterState>,
    pub session: RwSignal<SearchSession<T>>,
    default_state: StoredValue<FilterState>,
}

impl<T: Send + Sync + 'static> Clone for SearchPage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SearchPage<T> {}

impl<T: Clone + Send + Sync + 'static> SearchPage<T> {
    pub fn new(default_state: FilterState) -> Self {
        Self {
            state: RwSignal::new(default_state.clone()),
            session: RwSignal::new(SearchSession::new()),
            default_state: StoredValue::new(default_state),
        }
    }

    /// Изменить состояние фильтров. Если ничего не изменилось, запрос не уходит.
    pub fn apply(&self, change: impl FnOnce(&mut FilterState)) {
        let mut next = self.state.get_untracked();
        change(&mut next);
        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
    }

    /// "Limpar filtros": всё к состоянию по умолчанию
    pub fn clear(&self) {
        let default_state = self.default_state.get_value();
        self.apply(|s| *s = default_state);
    }

    pub fn page(&self) -> u64 {
        self.state.with(|s| s.page)
    }

    pub fn total_pages(&self) -> u64 {
        self.session.with(|s| s.total_pages(PAGE_SIZE))
    }

    pub fn total_count(&self) -> u64 {
        self.session.with(|s| s.total_count())
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_loading())
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.with(|s| s.active_filter_count())
    }

    /// Подписаться на изменения фильтров: каждое изменение → новый запрос.
    /// Ошибка показывает уведомление, область результатов становится пустой.
    pub fn run_on_change<F, Fut>(
        &self,
        category: &'static str,
        fetch: F,
        notifications: NotificationStore,
        loading: LoadingStore,
    ) where
        F: Fn(FilterState) -> Fut + 'static,
        Fut: Future<Output = Result<ResultPage<T>, String>> + 'static,
    {
        let page = *self;
        Effect::new(move |_| {
            let filter = page.state.get();
            let Some(generation) = page.session.try_update(|s| s.begin()) else {
                return;
            };
            let request = fetch(filter);
            spawn_local(async move {
                let result = loading.track(request).await;
                match page.session.try_update(|s| s.complete(generation, result)) {
                    Some(Completion::Failed(e)) => {
                        notifications.error(category, format!("Não foi possível carregar os dados: {}", e));
                    }
                    Some(Completion::Stale) => {
                        log::debug!("[{}] discarded stale response #{}", category, generation);
                    }
                    _ => {}
                }
            });
        });
    }
}
