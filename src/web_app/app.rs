// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and the route table.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{
    EndpointCertificatesPage, KeyManagerDetailPage, KeyManagersPage, SubscriptionTiersPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="API Manager Admin" />
        <Meta name="description" content="Administration console for the API management platform" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/admin_console.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=KeyManagersPage />
                <Route path=path!("/key-managers") view=KeyManagersPage />
                <Route path=path!("/key-managers/:id") view=KeyManagerDetailPage />
                <Route path=path!("/endpoint-certificates") view=EndpointCertificatesPage />
                <Route path=path!("/subscription/tiers") view=SubscriptionTiersPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/key-managers"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Key Managers"
                </a>
            </div>
        </div>
    }
}
