// web_app/api/endpoint_certificates.rs - Endpoint certificate calls against the publisher API
//
// Listing returns every alias at once; after windowing, each visible row is
// completed with its usage count and certificate details. A failed lookup
// leaves that part empty instead of failing the whole page.

use reqwest::multipart::{Form, Part};

use crate::web_app::list::{ListResponse, PageRequest};
use crate::web_app::model::{
    CertificateDetails, CertificateListing, CertificateMetadata, CertificateUpload,
    CertificateUsage, EndpointCertificate,
};

use super::client::{AdminApiClient, AdminApiError};
use super::window;

pub const ENDPOINT_CERTIFICATES_PATH: &str = "/endpoint-certificates";

pub fn certificate_path(alias: &str) -> String {
    format!("{}/{}", ENDPOINT_CERTIFICATES_PATH, urlencoding::encode(alias))
}

/// One page of certificates matching the request's search term
pub async fn list(
    client: &AdminApiClient,
    request: &PageRequest,
) -> Result<ListResponse<EndpointCertificate>, AdminApiError> {
    let listing: CertificateListing = client.get_json(ENDPOINT_CERTIFICATES_PATH).await?;
    let page = window(listing.into_certificates(), request, |cert, query| {
        cert.matches(query)
    });

    let mut rows = Vec::with_capacity(page.list.len());
    for metadata in page.list {
        rows.push(complete(client, metadata).await);
    }

    Ok(ListResponse {
        list: rows,
        pagination: page.pagination,
    })
}

async fn complete(client: &AdminApiClient, metadata: CertificateMetadata) -> EndpointCertificate {
    let path = certificate_path(&metadata.alias);

    let usage = match client.get_json::<CertificateUsage>(&format!("{}/usage", path)).await {
        Ok(usage) => usage.count,
        Err(e) => {
            tracing::warn!("Usage of certificate {} unavailable: {}", metadata.alias, e);
            0
        }
    };
    let details = match client.get_json::<CertificateDetails>(&path).await {
        Ok(details) => Some(details),
        Err(e) => {
            tracing::warn!("Details of certificate {} unavailable: {}", metadata.alias, e);
            None
        }
    };

    EndpointCertificate::new(metadata, usage, details)
}

pub async fn delete(client: &AdminApiClient, alias: &str) -> Result<(), AdminApiError> {
    client.delete(&certificate_path(alias)).await
}

/// Upload a PEM certificate under a new alias
pub async fn upload(
    client: &AdminApiClient,
    upload: &CertificateUpload,
) -> Result<CertificateMetadata, AdminApiError> {
    let file = Part::text(upload.certificate.clone())
        .file_name(format!("{}.pem", upload.alias))
        .mime_str("application/x-pem-file")?;
    let form = Form::new()
        .text("alias", upload.alias.clone())
        .text("endpoint", upload.endpoint.clone())
        .part("certificate", file);

    client.post_multipart(ENDPOINT_CERTIFICATES_PATH, form).await
}
