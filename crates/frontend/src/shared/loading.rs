//! Счётчик запросов в полёте. Единственный подписчик: `ApiStatusIndicator`.

use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct LoadingStore {
    in_flight: RwSignal<u32>,
}

impl LoadingStore {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    pub fn end(&self) {
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight.get()
    }

    /// Выполнить запрос, держа счётчик увеличенным
    pub async fn track<F: Future>(self, future: F) -> F::Output {
        self.begin();
        let output = future.await;
        self.end();
        output
    }
}

impl Default for LoadingStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_loading() -> LoadingStore {
    use_context::<LoadingStore>().expect("LoadingStore not found in context")
}
