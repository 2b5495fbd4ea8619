use contracts::domain::a001_tender::{TenderDetail, TenderId};
use leptos::prelude::*;

use crate::domain::a001_tender::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys;
use crate::shared::loading::LoadingStore;
use crate::shared::notifications::NotificationStore;

/// ViewModel карточки лицитации
#[derive(Clone, Copy)]
pub struct TenderDetailsViewModel {
    pub id: TenderId,
    pub detail: RwSignal<Option<TenderDetail>>,
}

impl TenderDetailsViewModel {
    pub fn new(id: TenderId) -> Self {
        Self {
            id,
            detail: RwSignal::new(None),
        }
    }

    /// Загрузить карточку. Несуществующая или недоступная лицитация закрывает
    /// таб и возвращает к списку.
    pub fn load(
        &self,
        ctx: AppGlobalContext,
        notifications: NotificationStore,
        loading: LoadingStore,
        on_close: Callback<()>,
    ) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match loading.track(api::get_detail(vm.id)).await {
                Ok(detail) => {
                    ctx.update_tab_title(
                        &keys::tender_detail(vm.id),
                        &format!("Licitação {}", detail.tender.number),
                    );
                    let _ = vm.detail.try_set(Some(detail));
                }
                Err(e) => {
                    notifications.error(
                        "a001_tender",
                        format!("Não foi possível abrir a licitação #{}: {}", vm.id.value(), e),
                    );
                    on_close.run(());
                    ctx.open(keys::TENDERS);
                }
            }
        });
    }
}
