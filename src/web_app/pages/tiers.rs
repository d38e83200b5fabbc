// web_app/pages/tiers.rs - Subscription tier list page
//
// Static data: the built-in tiers are windowed, searched and sorted in the
// browser without any server call.

use leptos::prelude::*;

use crate::web_app::components::{ErrorDisplay, PageShell, ResourceList};
use crate::web_app::list::{CellValue, ColumnDescriptor, ConfigError, ListConfig};
use crate::web_app::model::{builtin_tiers, SubscriptionTier};

pub fn tier_list_config() -> Result<ListConfig<SubscriptionTier>, ConfigError> {
    ListConfig::builder()
        .static_items(builtin_tiers())
        .column(
            ColumnDescriptor::new("name", "Name", |t: &SubscriptionTier| t.name.as_str().into())
                .sortable(),
        )
        .column(ColumnDescriptor::new(
            "description",
            "Description",
            |t: &SubscriptionTier| t.description.as_str().into(),
        ))
        .column(
            ColumnDescriptor::new("quota", "Quota", |t: &SubscriptionTier| {
                CellValue::Number(t.quota_rank())
            })
            .sortable()
            .render_with(|_, t| t.quota_label()),
        )
        .column(ColumnDescriptor::new(
            "stopOnQuotaReach",
            "Stop on Quota Reach",
            |t: &SubscriptionTier| t.stop_on_quota_reach.into(),
        ))
        .local_search(|t: &SubscriptionTier, term: &str| t.matches(term))
        .search_placeholder("Search by tier name or description")
        .no_data_message("No subscription tiers match")
        .page_size_options(vec![5, 10, 25])
        .build()
}

#[component]
pub fn SubscriptionTiersPage() -> impl IntoView {
    let content = match tier_list_config() {
        Ok(config) => view! { <ResourceList config=config /> }.into_any(),
        Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
    };

    view! {
        <PageShell title="Subscription Tiers".to_string()>
            {content}
        </PageShell>
    }
}
