// web_app/pages/key_manager_detail.rs - Key manager detail page
//
// Loads one key manager by route id, shows its summary, and lets the
// certificate be replaced.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::web_app::certificate::CertificateValue;
use crate::web_app::components::{
    Badge, Button, CertificateField, ErrorDisplay, Loading, PageShell,
};
use crate::web_app::model::KeyManager;
use crate::web_app::server_fns::{get_key_manager, update_key_manager_certificate};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed(String),
}

#[component]
pub fn KeyManagerDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let key_manager = Resource::new(move || id.get(), get_key_manager);

    view! {
        <PageShell title="Key Manager".to_string()>
            <a href="/key-managers" class="text-sm text-blue-600 hover:underline">"← Key Managers"</a>
            <Suspense fallback=move || view! { <Loading message="Loading key manager..." /> }>
                {move || key_manager.get().map(|result| match result {
                    Ok(km) => view! { <KeyManagerDetail key_manager=km /> }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                })}
            </Suspense>
        </PageShell>
    }
}

#[component]
fn KeyManagerDetail(key_manager: KeyManager) -> impl IntoView {
    let id = key_manager.id.clone();
    let jwks_allowed = key_manager.supports_jwks();
    let initial = key_manager.certificates.clone().unwrap_or_default();

    let certificate = RwSignal::new(initial.clone());
    let save_state = RwSignal::new(SaveState::Idle);

    let on_change = Callback::new(move |value: CertificateValue| {
        certificate.set(value);
        save_state.set(SaveState::Idle);
    });

    let on_save = Callback::new(move |_: ()| {
        let id = id.clone();
        let value = certificate.get_untracked();
        save_state.set(SaveState::Saving);
        spawn_local(async move {
            let state = match update_key_manager_certificate(id, value).await {
                Ok(_) => SaveState::Saved,
                Err(e) => SaveState::Failed(e.to_string()),
            };
            save_state.try_set(state);
        });
    });

    let summary = key_manager.summary();
    let (badge_variant, badge_text) = if summary.enabled {
        ("green", "Enabled")
    } else {
        ("gray", "Disabled")
    };

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6 mt-4 space-y-6">
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-xl font-semibold">{summary.title().to_string()}</h2>
                    <p class="text-sm text-gray-500">{summary.kind.clone()}</p>
                </div>
                <Badge variant=badge_variant>{badge_text}</Badge>
            </div>

            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                <div>
                    <dt class="text-gray-500">"Description"</dt>
                    <dd>{summary.description.clone().unwrap_or_default()}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"Issuer"</dt>
                    <dd>{key_manager.issuer.clone().unwrap_or_default()}</dd>
                </div>
                <div>
                    <dt class="text-gray-500">"Well-known endpoint"</dt>
                    <dd class="break-all">{key_manager.well_known_endpoint.clone().unwrap_or_default()}</dd>
                </div>
            </dl>

            <CertificateField initial=initial jwks_allowed=jwks_allowed on_change=on_change />

            <div class="flex items-center gap-4">
                {move || {
                    let saving = save_state.with(|s| *s == SaveState::Saving);
                    view! { <Button on_click=on_save disabled=saving>"Save Certificate"</Button> }
                }}
                {move || match save_state.get() {
                    SaveState::Saved => Some(view! {
                        <span class="text-sm text-green-700" role="status">"Certificate saved."</span>
                    }.into_any()),
                    SaveState::Failed(message) => Some(view! {
                        <span class="text-sm text-red-700" role="alert">{message}</span>
                    }.into_any()),
                    _ => None,
                }}
            </div>
        </div>
    }
}
