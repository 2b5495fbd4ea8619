use contracts::system::profile::{Profile, ProfileKind, UpdateProfileDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::PageHeader;
use crate::shared::loading::use_loading;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::{update_full_name, use_auth};
use crate::system::profile::api;

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let notifications = use_notifications();
    let loading = use_loading();
    let (_, set_auth_state) = use_auth();

    let profile = RwSignal::new(Option::<Profile>::None);
    let full_name = RwSignal::new(String::new());
    let kind = RwSignal::new(ProfileKind::default());
    let bio = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let is_saving = RwSignal::new(false);

    let fill_form = move |p: &Profile| {
        full_name.set(p.full_name.clone().unwrap_or_default());
        kind.set(p.kind);
        bio.set(p.bio.clone().unwrap_or_default());
        avatar_url.set(p.avatar_url.clone().unwrap_or_default());
    };

    spawn_local(async move {
        match loading.track(api::get_profile()).await {
            Ok(p) => {
                fill_form(&p);
                profile.set(Some(p));
            }
            Err(e) => notifications.error("profile", format!("Não foi possível carregar o perfil: {}", e)),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_notifications = profile
            .with_untracked(|p| p.as_ref().map(|p| p.email_notifications))
            .unwrap_or(true);
        let dto = UpdateProfileDto {
            full_name: optional(full_name.get_untracked()),
            kind: kind.get_untracked(),
            bio: optional(bio.get_untracked()),
            avatar_url: optional(avatar_url.get_untracked()),
            email_notifications,
        };
        if let Err(e) = dto.validate() {
            notifications.error("profile", e);
            return;
        }

        is_saving.set(true);
        spawn_local(async move {
            match loading.track(api::save_profile(&dto)).await {
                Ok(saved) => {
                    update_full_name(set_auth_state, saved.full_name.clone());
                    fill_form(&saved);
                    profile.set(Some(saved));
                    notifications.success("Perfil atualizado com sucesso.");
                }
                Err(e) => notifications.error("profile", format!("Erro ao salvar o perfil: {}", e)),
            }
            let _ = is_saving.try_set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Meu perfil" icon_name="user" subtitle="Dados exibidos para a sua conta".to_string()>
                {()}
            </PageHeader>

            <form class="form-card" on:submit=on_submit>
                <div class="form-group">
                    <label for="profile-email">"E-mail"</label>
                    <input
                        id="profile-email"
                        type="email"
                        readonly
                        prop:value=move || profile.with(|p| p.as_ref().map(|p| p.email.clone()).unwrap_or_default())
                    />
                </div>

                <div class="form-group">
                    <label for="profile-name">"Nome completo"</label>
                    <input
                        id="profile-name"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="profile-kind">"Tipo de perfil"</label>
                    <select
                        id="profile-kind"
                        prop:value=move || kind.get().code()
                        on:change=move |ev| {
                            if let Some(k) = ProfileKind::from_code(&event_target_value(&ev)) {
                                kind.set(k);
                            }
                        }
                    >
                        {ProfileKind::all().into_iter().map(|k| view! {
                            <option value=k.code() selected=move || kind.get() == k>{k.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="profile-bio">"Bio"</label>
                    <textarea
                        id="profile-bio"
                        rows="4"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="profile-avatar">"URL do avatar"</label>
                    <input
                        id="profile-avatar"
                        type="url"
                        placeholder="https://"
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| avatar_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_saving.get() || profile.with(|p| p.is_none())
                    >
                        {move || if is_saving.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
