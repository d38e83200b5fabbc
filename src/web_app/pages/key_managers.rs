// web_app/pages/key_managers.rs - Key manager list page
//
// A server-backed ResourceList: every search, page or page-size change
// calls the `list_key_managers` server function.

use futures::FutureExt;
use leptos::prelude::*;

use crate::web_app::components::{ErrorDisplay, PageShell, ResourceList};
use crate::web_app::list::{
    ActionLabel, CellValue, ColumnDescriptor, ConfigError, ListConfig, RowAction,
};
use crate::web_app::model::KeyManagerSummary;
use crate::web_app::server_fns::{delete_key_manager, fetch_key_managers};

/// Detail route of a key manager; the id is percent-encoded
pub fn key_manager_path(km: &KeyManagerSummary) -> String {
    format!("/key-managers/{}", urlencoding::encode(&km.id))
}

/// List configuration for the key manager page
pub fn key_manager_list_config() -> Result<ListConfig<KeyManagerSummary>, ConfigError> {
    ListConfig::builder()
        .fetch_page(fetch_key_managers)
        .column(
            ColumnDescriptor::new("name", "Name", |km: &KeyManagerSummary| km.title().into())
                .sortable(),
        )
        .column(
            ColumnDescriptor::new("type", "Type", |km: &KeyManagerSummary| {
                km.kind.as_str().into()
            })
            .sortable(),
        )
        .column(ColumnDescriptor::new(
            "description",
            "Description",
            |km: &KeyManagerSummary| km.description.clone().into(),
        ))
        .column(
            ColumnDescriptor::new("enabled", "Status", |km: &KeyManagerSummary| {
                km.enabled.into()
            })
            .sortable()
            .render_with(|value, _| match value {
                CellValue::Bool(true) => "Enabled".to_string(),
                _ => "Disabled".to_string(),
            })
            .badge(|value, _| match value {
                CellValue::Bool(true) => "green",
                _ => "gray",
            }),
        )
        .row_action(RowAction::edit(
            ActionLabel::new("Edit", "Edit key manager"),
            key_manager_path,
        ))
        .row_action(RowAction::delete(
            ActionLabel::new("Delete", "Delete key manager"),
            |km: &KeyManagerSummary| {
                format!("Key manager {} will be deleted permanently.", km.title())
            },
            |km: &KeyManagerSummary| {
                let id = km.id.clone();
                async move { delete_key_manager(id).await.map_err(|e| e.to_string()) }
                    .boxed_local()
            },
        ))
        .no_data_message("No Key Managers yet")
        .search_placeholder("Search by key manager name, type or description")
        .build()
}

#[component]
pub fn KeyManagersPage() -> impl IntoView {
    let content = match key_manager_list_config() {
        Ok(config) => view! { <ResourceList config=config /> }.into_any(),
        Err(e) => {
            tracing::error!("Invalid key manager list configuration: {}", e);
            view! { <ErrorDisplay error=e.to_string() /> }.into_any()
        }
    };

    view! {
        <PageShell title="Key Managers".to_string()>
            {content}
        </PageShell>
    }
}
