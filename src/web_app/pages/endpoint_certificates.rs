// web_app/pages/endpoint_certificates.rs - Endpoint certificate page
//
// A server-backed ResourceList of backend certificates plus a form to add
// one. Rows open to show status, subject and validity; deleting warns when
// other APIs still use the certificate. A successful upload remounts the
// list so it starts again from the first page.

use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::certificate::{decode_pem, CertificateValue};
use crate::web_app::components::{
    Button, CertificateField, ErrorDisplay, PageShell, ResourceList, SecondaryButton,
};
use crate::web_app::list::{
    ActionLabel, CellValue, ColumnDescriptor, ConfigError, ListConfig, RowAction,
};
use crate::web_app::model::{CertificateUpload, EndpointCertificate};
use crate::web_app::server_fns::{
    delete_endpoint_certificate, fetch_endpoint_certificates, upload_endpoint_certificate,
};

/// Badge color for a certificate status
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "Active" => "green",
        "Expired" => "red",
        _ => "gray",
    }
}

pub fn endpoint_certificate_list_config() -> Result<ListConfig<EndpointCertificate>, ConfigError>
{
    ListConfig::builder()
        .fetch_page(fetch_endpoint_certificates)
        .column(
            ColumnDescriptor::new("alias", "Alias", |c: &EndpointCertificate| {
                c.alias.as_str().into()
            })
            .sortable(),
        )
        .column(
            ColumnDescriptor::new("endpoint", "Endpoint", |c: &EndpointCertificate| {
                c.endpoint.as_str().into()
            })
            .sortable(),
        )
        .column(
            ColumnDescriptor::new("usage", "Used By", |c: &EndpointCertificate| {
                CellValue::Number(i64::try_from(c.usage_count).unwrap_or(i64::MAX))
            })
            .sortable()
            .render_with(|_, c| match c.usage_count {
                1 => "1 API".to_string(),
                n => format!("{} APIs", n),
            }),
        )
        .column(
            ColumnDescriptor::new("status", "Status", |c: &EndpointCertificate| {
                c.status().into()
            })
            .badge(|_, c| status_variant(c.status())),
        )
        .expand(|c: &EndpointCertificate| c.details_text())
        .row_action(RowAction::delete(
            ActionLabel::new("Delete", "Delete certificate"),
            |c: &EndpointCertificate| c.delete_prompt(),
            |c: &EndpointCertificate| {
                let alias = c.alias.clone();
                async move {
                    delete_endpoint_certificate(alias)
                        .await
                        .map_err(|e| e.to_string())
                }
                .boxed_local()
            },
        ))
        .no_data_message("You do not have any certificates uploaded")
        .search_placeholder("Search by alias or endpoint")
        .build()
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum UploadState {
    Editing,
    Uploading,
    Failed(String),
}

#[component]
pub fn EndpointCertificatesPage() -> impl IntoView {
    let generation = RwSignal::new(0u32);
    let show_form = RwSignal::new(false);
    let last_uploaded = RwSignal::new(None::<String>);

    let on_uploaded = Callback::new(move |alias: String| {
        last_uploaded.set(Some(alias));
        show_form.set(false);
        generation.update(|g| *g += 1);
    });

    let content = move || {
        generation.track();
        match endpoint_certificate_list_config() {
            Ok(config) => view! { <ResourceList config=config /> }.into_any(),
            Err(e) => {
                tracing::error!("Invalid endpoint certificate list configuration: {}", e);
                view! { <ErrorDisplay error=e.to_string() /> }.into_any()
            }
        }
    };

    view! {
        <PageShell title="Endpoint Certificates".to_string()>
            <div class="mb-4 flex items-center gap-4">
                <Show when=move || !show_form.get()>
                    <Button on_click=Callback::new(move |_| show_form.set(true))>"Add Certificate"</Button>
                </Show>
                {move || last_uploaded.get().map(|alias| view! {
                    <span class="text-sm text-green-700" role="status">
                        {format!("Certificate {} uploaded.", alias)}
                    </span>
                })}
            </div>
            <Show when=move || show_form.get()>
                <UploadCertificateForm
                    on_uploaded=on_uploaded
                    on_cancel=Callback::new(move |_| show_form.set(false))
                />
            </Show>
            {content}
        </PageShell>
    }
}

#[component]
fn UploadCertificateForm(
    /// Called with the alias once the upload succeeded
    on_uploaded: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let alias = RwSignal::new(String::new());
    let endpoint = RwSignal::new(String::new());
    let certificate = RwSignal::new(CertificateValue::default());
    let state = RwSignal::new(UploadState::Editing);

    let on_change = Callback::new(move |value: CertificateValue| certificate.set(value));

    let on_save = Callback::new(move |_: ()| {
        let upload = CertificateUpload {
            alias: alias.get_untracked(),
            endpoint: endpoint.get_untracked(),
            certificate: certificate
                .with_untracked(|c| decode_pem(&c.value))
                .unwrap_or_default(),
        };
        let upload = match upload.validated() {
            Ok(upload) => upload,
            Err(e) => {
                state.set(UploadState::Failed(e.to_string()));
                return;
            }
        };

        state.set(UploadState::Uploading);
        spawn_local(async move {
            match upload_endpoint_certificate(upload).await {
                Ok(saved) => on_uploaded.run(saved.alias),
                Err(e) => {
                    state.try_set(UploadState::Failed(e.to_string()));
                }
            }
        });
    });

    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg";

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6 mb-6 space-y-4">
            <h2 class="text-lg font-semibold">"Upload Certificate"</h2>
            <label class="block text-sm text-gray-700">
                "Alias"
                <input
                    type="text"
                    class=input_class
                    prop:value=move || alias.get()
                    on:input=move |ev| alias.set(event_target_value(&ev))
                />
            </label>
            <label class="block text-sm text-gray-700">
                "Endpoint"
                <input
                    type="url"
                    placeholder="https://backend.example.com"
                    class=input_class
                    prop:value=move || endpoint.get()
                    on:input=move |ev| endpoint.set(event_target_value(&ev))
                />
            </label>
            <CertificateField initial=CertificateValue::default() jwks_allowed=false on_change=on_change />
            {move || match state.get() {
                UploadState::Failed(message) => Some(view! {
                    <p class="text-sm text-red-700" role="alert">{message}</p>
                }),
                _ => None,
            }}
            <div class="flex justify-end gap-3">
                <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                {move || {
                    let uploading = state.with(|s| *s == UploadState::Uploading);
                    view! { <Button on_click=on_save disabled=uploading>"Upload"</Button> }
                }}
            </div>
        </div>
    }
}
