// web_app/components/certificates.rs - Certificate input for key managers
//
// Thin view over CertificateEditor: a PEM/JWKS type choice, Paste/Upload
// tabs for PEM, and a URL field for JWKS. Every edit goes through
// `CertificateEditor::apply` and the resulting value is reported upward.

use leptos::prelude::*;

use crate::web_app::certificate::{
    CertificateEditor, CertificateEvent, CertificateType, CertificateValue, InputTab,
};

#[component]
pub fn CertificateField(
    /// Certificate currently stored on the key manager
    initial: CertificateValue,
    /// Whether a JWKS endpoint may be used instead of a PEM certificate
    jwks_allowed: bool,
    /// Called with the new value after every edit
    on_change: Callback<CertificateValue>,
) -> impl IntoView {
    let editor = RwSignal::new(CertificateEditor::new(initial, jwks_allowed));

    let apply = move |event: CertificateEvent| {
        if let Some(value) = editor.try_update(|e| e.apply(event)) {
            on_change.run(value);
        }
    };

    // Only re-render the input area when the type or tab changes, so typing
    // does not rebuild the text box
    let kind = Memo::new(move |_| editor.with(|e| e.value().kind));
    let tab = Memo::new(move |_| editor.with(|e| e.tab()));

    let type_choice = jwks_allowed.then(|| {
        view! {
            <div role="radiogroup" aria-label="Certificate type" class="flex gap-6 mb-4">
                <label class="flex items-center gap-2">
                    <input
                        type="radio"
                        name="certificate-type"
                        value="PEM"
                        prop:checked={move || kind.get() == CertificateType::Pem}
                        on:change=move |_| apply(CertificateEvent::SelectType(CertificateType::Pem))
                    />
                    "PEM"
                </label>
                <label class="flex items-center gap-2">
                    <input
                        type="radio"
                        name="certificate-type"
                        value="JWKS"
                        prop:checked={move || kind.get() == CertificateType::Jwks}
                        on:change=move |_| apply(CertificateEvent::SelectType(CertificateType::Jwks))
                    />
                    "JWKS"
                </label>
            </div>
        }
    });

    let tab_class = move |t: InputTab| {
        if tab.get() == t {
            "px-4 py-2 border-b-2 border-blue-600 text-blue-700 font-medium"
        } else {
            "px-4 py-2 border-b-2 border-transparent text-gray-500 hover:text-gray-700"
        }
    };

    let input_area = move || match (kind.get(), tab.get()) {
        (CertificateType::Jwks, _) => view! {
            <input
                type="url"
                aria-label="JWKS URL"
                placeholder="https://idp.example.com/oauth2/jwks"
                class="w-full px-4 py-2 border border-gray-300 rounded-lg"
                prop:value=move || editor.with(|e| e.value().value.clone())
                on:input=move |ev| apply(CertificateEvent::SetJwksUrl(event_target_value(&ev)))
            />
        }
        .into_any(),
        (CertificateType::Pem, InputTab::Paste) => view! {
            <textarea
                aria-label="PEM certificate"
                rows="8"
                placeholder="-----BEGIN CERTIFICATE-----"
                class="w-full px-4 py-2 border border-gray-300 rounded-lg font-mono text-xs"
                prop:value=move || editor.with(|e| e.pem_text())
                on:input=move |ev| apply(CertificateEvent::PastePem(event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        (CertificateType::Pem, InputTab::Upload) => view! {
            <div class="space-y-2">
                <input
                    type="file"
                    accept=".pem,.crt,.cer"
                    aria-label="Upload PEM certificate"
                    on:change=move |ev| read_uploaded_file(ev, apply)
                />
                {move || editor.with(|e| e.uploaded_file().map(|name| view! {
                    <p class="text-sm text-gray-600">"Selected: " {name.to_string()}</p>
                }))}
            </div>
        }
        .into_any(),
    };

    view! {
        <fieldset class="space-y-2">
            <legend class="text-sm font-semibold text-gray-700 mb-2">"Certificate"</legend>
            {type_choice}
            <Show when=move || kind.get() == CertificateType::Pem>
                <div role="tablist" class="flex border-b border-gray-200 mb-3">
                    <button
                        type="button"
                        role="tab"
                        class=move || tab_class(InputTab::Paste)
                        on:click=move |_| apply(CertificateEvent::SelectTab(InputTab::Paste))
                    >
                        "Paste"
                    </button>
                    <button
                        type="button"
                        role="tab"
                        class=move || tab_class(InputTab::Upload)
                        on:click=move |_| apply(CertificateEvent::SelectTab(InputTab::Upload))
                    >
                        "Upload"
                    </button>
                </div>
            </Show>
            {input_area}
        </fieldset>
    }
}

/// Read the picked file as text and feed it to the editor
#[cfg(feature = "hydrate")]
fn read_uploaded_file<F>(ev: leptos::ev::Event, apply: F)
where
    F: Fn(CertificateEvent) + 'static,
{
    use leptos::web_sys::{FileReader, HtmlInputElement};
    use wasm_bindgen::{closure::Closure, JsCast};

    let input: HtmlInputElement = event_target(&ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let Ok(reader) = FileReader::new() else {
        tracing::error!("FileReader is not available");
        return;
    };

    let file_name = file.name();
    let loaded = reader.clone();
    let onload = Closure::once_into_js(move || {
        match loaded.result().ok().and_then(|v| v.as_string()) {
            Some(contents) => apply(CertificateEvent::UploadPem {
                file_name,
                contents,
            }),
            None => tracing::warn!("Uploaded certificate {} is not text", file_name),
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if reader.read_as_text(&file).is_err() {
        tracing::error!("Could not read uploaded certificate");
    }
}

// File APIs only exist in the browser
#[cfg(not(feature = "hydrate"))]
fn read_uploaded_file<F>(_ev: leptos::ev::Event, _apply: F)
where
    F: Fn(CertificateEvent) + 'static,
{
}
