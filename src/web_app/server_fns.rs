// web_app/server_fns.rs - Leptos server function declarations
//
// Compiled for both ssr and hydrate. On the server these call the admin
// REST API; in the browser the #[server] macro turns them into HTTP stubs
// under /api.

use leptos::prelude::*;

use crate::web_app::certificate::CertificateValue;
use crate::web_app::list::{FetchError, FetchFuture, ListResponse, PageRequest};
use crate::web_app::model::{
    CertificateMetadata, CertificateUpload, EndpointCertificate, KeyManager, KeyManagerSummary,
};

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::client::AdminApiClient, ServerFnError> {
    crate::web_app::api::client::get_client()
        .ok_or_else(|| ServerFnError::new("Admin API client not available"))
}

/// One page of key managers, filtered by `query`
#[server(ListKeyManagers, "/api")]
pub async fn list_key_managers(
    limit: u32,
    offset: u64,
    query: String,
) -> Result<ListResponse<KeyManagerSummary>, ServerFnError> {
    use crate::web_app::api::key_managers;

    tracing::info!(
        "List key managers: limit={}, offset={}, query='{}'",
        limit,
        offset,
        query
    );

    let client = client()?;
    let request = PageRequest { limit, offset, query };
    let result = key_managers::list(&client, &request).await;

    match &result {
        Ok(page) => tracing::info!(
            "Listed {} of {} key managers",
            page.list.len(),
            page.pagination.total
        ),
        Err(e) => tracing::error!("Listing key managers failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to list key managers: {}", e)))
}

#[server(GetKeyManager, "/api")]
pub async fn get_key_manager(id: String) -> Result<KeyManager, ServerFnError> {
    use crate::web_app::api::key_managers;

    tracing::info!("Get key manager: id={}", id);
    let client = client()?;

    key_managers::get(&client, &id).await.map_err(|e| {
        tracing::error!("Fetching key manager {} failed: {}", id, e);
        ServerFnError::new(format!("Failed to load key manager: {}", e))
    })
}

#[server(DeleteKeyManager, "/api")]
pub async fn delete_key_manager(id: String) -> Result<(), ServerFnError> {
    use crate::web_app::api::key_managers;

    tracing::info!("Delete key manager: id={}", id);
    let client = client()?;

    key_managers::delete(&client, &id).await.map_err(|e| {
        tracing::error!("Deleting key manager {} failed: {}", id, e);
        ServerFnError::new(format!("Failed to delete key manager: {}", e))
    })
}

/// Replace the certificate of a key manager
#[server(UpdateKeyManagerCertificate, "/api")]
pub async fn update_key_manager_certificate(
    id: String,
    certificate: CertificateValue,
) -> Result<KeyManager, ServerFnError> {
    use crate::web_app::api::key_managers;

    tracing::info!("Update certificate: id={}, type={}", id, certificate.kind);
    let client = client()?;

    key_managers::update_certificate(&client, &id, certificate)
        .await
        .map_err(|e| {
            tracing::error!("Updating certificate of {} failed: {}", id, e);
            ServerFnError::new(format!("Failed to update certificate: {}", e))
        })
}

/// One page of endpoint certificates with usage counts and details
#[server(ListEndpointCertificates, "/api")]
pub async fn list_endpoint_certificates(
    limit: u32,
    offset: u64,
    query: String,
) -> Result<ListResponse<EndpointCertificate>, ServerFnError> {
    use crate::web_app::api::endpoint_certificates;

    tracing::info!(
        "List endpoint certificates: limit={}, offset={}, query='{}'",
        limit,
        offset,
        query
    );

    let client = client()?.publisher();
    let request = PageRequest { limit, offset, query };
    endpoint_certificates::list(&client, &request)
        .await
        .map_err(|e| {
            tracing::error!("Listing endpoint certificates failed: {}", e);
            ServerFnError::new(format!("Failed to list certificates: {}", e))
        })
}

#[server(DeleteEndpointCertificate, "/api")]
pub async fn delete_endpoint_certificate(alias: String) -> Result<(), ServerFnError> {
    use crate::web_app::api::endpoint_certificates;

    tracing::info!("Delete endpoint certificate: alias={}", alias);
    let client = client()?.publisher();

    endpoint_certificates::delete(&client, &alias).await.map_err(|e| {
        tracing::error!("Deleting certificate {} failed: {}", alias, e);
        ServerFnError::new(format!("Failed to delete certificate: {}", e))
    })
}

/// Validate and upload a PEM certificate under a new alias
#[server(UploadEndpointCertificate, "/api")]
pub async fn upload_endpoint_certificate(
    upload: CertificateUpload,
) -> Result<CertificateMetadata, ServerFnError> {
    use crate::web_app::api::endpoint_certificates;

    let upload = upload.validated().map_err(|e| {
        tracing::warn!("Rejected certificate upload: {}", e);
        ServerFnError::new(e.to_string())
    })?;
    tracing::info!(
        "Upload endpoint certificate: alias={}, endpoint={}",
        upload.alias,
        upload.endpoint
    );
    let client = client()?.publisher();

    endpoint_certificates::upload(&client, &upload).await.map_err(|e| {
        tracing::error!("Uploading certificate {} failed: {}", upload.alias, e);
        ServerFnError::new(format!("Failed to upload certificate: {}", e))
    })
}

impl From<ServerFnError> for FetchError {
    fn from(err: ServerFnError) -> Self {
        match err {
            ServerFnError::Deserialization(msg) => FetchError::Malformed(msg),
            ServerFnError::ServerError(msg) => FetchError::Transport(msg),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Fetch function for the key manager list view
pub fn fetch_key_managers(request: PageRequest) -> FetchFuture<KeyManagerSummary> {
    use futures::FutureExt;

    async move {
        list_key_managers(request.limit, request.offset, request.query)
            .await
            .map_err(FetchError::from)
    }
    .boxed_local()
}

/// Fetch function for the endpoint certificate list view
pub fn fetch_endpoint_certificates(request: PageRequest) -> FetchFuture<EndpointCertificate> {
    use futures::FutureExt;

    async move {
        list_endpoint_certificates(request.limit, request.offset, request.query)
            .await
            .map_err(FetchError::from)
    }
    .boxed_local()
}
