use contracts::shared::result_view::{ResultView, SearchSession};
use contracts::shared::search::PAGE_SIZE;
use leptos::prelude::*;

/// Сетка карточек результата: заглушки при загрузке, сообщение для пустого
/// результата, иначе по карточке на строку.
#[component]
pub fn ResultGrid<T, F>(
    session: RwSignal<SearchSession<T>>,
    empty_message: &'static str,
    render: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let render = StoredValue::new(render);

    move || match session.with(|s| s.view().clone()) {
        ResultView::Loading => view! {
            <div class="result-grid result-grid--loading" aria-busy="true">
                {(0..PAGE_SIZE).map(|_| view! {
                    <div class="card card--placeholder">
                        <div class="card__line card__line--title"></div>
                        <div class="card__line"></div>
                        <div class="card__line card__line--short"></div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
        ResultView::Empty => view! {
            <div class="result-empty">{empty_message}</div>
        }
        .into_any(),
        ResultView::Populated(rows) => view! {
            <div class="result-grid">
                {render.with_value(|r| rows.into_iter().map(r).collect_view())}
            </div>
        }
        .into_any(),
    }
}
