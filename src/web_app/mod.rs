// web_app/mod.rs - Root module for the admin console
//
// Architecture:
// - list/: Headless paginated list controller (no framework dependency)
// - certificate.rs: Certificate editor state (PEM / JWKS)
// - model/: Shared data types (used by both client and server)
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Admin REST API client and key manager calls (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod certificate;
pub mod list;
pub mod model;

// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
