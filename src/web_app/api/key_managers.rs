// web_app/api/key_managers.rs - Key manager calls against the admin API
//
// The admin API returns the whole key manager collection in one response,
// so the list view's search and paging go through `window`.

use crate::web_app::certificate::CertificateValue;
use crate::web_app::list::{ListResponse, PageRequest};
use crate::web_app::model::{KeyManager, KeyManagerList, KeyManagerSummary};

use super::client::{AdminApiClient, AdminApiError};
use super::window;

pub fn key_manager_path(id: &str) -> String {
    format!("/key-managers/{}", urlencoding::encode(id))
}

/// One page of key managers matching the request's search term
pub async fn list(
    client: &AdminApiClient,
    request: &PageRequest,
) -> Result<ListResponse<KeyManagerSummary>, AdminApiError> {
    let all: KeyManagerList = client.get_json("/key-managers").await?;
    tracing::debug!("Admin API returned {} key managers", all.list.len());
    Ok(paginate(all.list, request))
}

/// Filter by search term, then cut the requested window
pub fn paginate(
    items: Vec<KeyManagerSummary>,
    request: &PageRequest,
) -> ListResponse<KeyManagerSummary> {
    window(items, request, |km, query| km.matches(query))
}

pub async fn get(client: &AdminApiClient, id: &str) -> Result<KeyManager, AdminApiError> {
    client.get_json(&key_manager_path(id)).await
}

pub async fn delete(client: &AdminApiClient, id: &str) -> Result<(), AdminApiError> {
    client.delete(&key_manager_path(id)).await
}

/// Replace the certificate of a key manager, leaving every other field as stored
pub async fn update_certificate(
    client: &AdminApiClient,
    id: &str,
    certificate: CertificateValue,
) -> Result<KeyManager, AdminApiError> {
    let mut key_manager = get(client, id).await?;
    key_manager.certificates = Some(certificate);
    client.put_json(&key_manager_path(id), &key_manager).await
}
