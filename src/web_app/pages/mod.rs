// web_app/pages/mod.rs - Page components module
//
// - KeyManagersPage: server-backed key manager list
// - KeyManagerDetailPage: one key manager and its certificate
// - EndpointCertificatesPage: backend certificates, with upload and delete
// - SubscriptionTiersPage: built-in tiers, searched and sorted client-side

pub mod endpoint_certificates;
pub mod key_manager_detail;
pub mod key_managers;
pub mod tiers;

pub use endpoint_certificates::EndpointCertificatesPage;
pub use key_manager_detail::KeyManagerDetailPage;
pub use key_managers::KeyManagersPage;
pub use tiers::SubscriptionTiersPage;
