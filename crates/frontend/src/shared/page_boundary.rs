use leptos::prelude::*;

use crate::shared::icons::icon;

/// Граница ошибок страницы: ошибка рендера показывает статичную панель
/// с кнопкой повтора, остальное приложение продолжает работать.
#[component]
pub fn PageBoundary(children: ChildrenFn) -> impl IntoView {
    let attempt = RwSignal::new(0u32);
    let children = StoredValue::new(children);

    move || {
        attempt.track();
        view! {
            <ErrorBoundary fallback=move |_errors| {
                log::error!("Page render failed, showing fallback panel");
                view! {
                    <div class="page-error">
                        {icon("alert")}
                        <h2 class="page-error__title">"Algo deu errado"</h2>
                        <p class="page-error__text">
                            "Não foi possível exibir esta página."
                        </p>
                        <button
                            class="button button--primary"
                            on:click=move |_| attempt.update(|n| *n += 1)
                        >
                            "Tentar novamente"
                        </button>
                    </div>
                }
            }>
                {children.with_value(|c| c())}
            </ErrorBoundary>
        }
    }
}
