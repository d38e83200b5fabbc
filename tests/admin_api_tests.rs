// tests/admin_api_tests.rs - Server functions against a stub admin API
//
// An Actix server on a free local port stands in for both the admin and the
// publisher API. The server functions resolve their client through the test
// override, so every call here crosses real HTTP. Requires the `ssr` feature.

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;

use admin_console::web_app::api::client::{set_test_client, AdminApiClient, AdminApiConfig};
use admin_console::web_app::api::endpoint_certificates::certificate_path;
use admin_console::web_app::model::CertificateUpload;
use admin_console::web_app::server_fns::{
    delete_endpoint_certificate, list_endpoint_certificates, list_key_managers,
    upload_endpoint_certificate,
};

const PEM: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----";

async fn key_managers() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "count": 3,
        "list": [
            { "id": "km-1", "name": "Resident", "type": "default", "enabled": true },
            { "id": "km-2", "name": "Okta Prod", "type": "Okta", "enabled": false },
            { "id": "km-3", "name": "Okta Dev", "type": "Okta" }
        ]
    }))
}

async fn certificates() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "count": 2,
        "certificates": [
            { "alias": "backend-tls", "endpoint": "https://backend.local" },
            { "alias": "legacy", "endpoint": "https://legacy.local" }
        ]
    }))
}

async fn certificate(alias: web::Path<String>) -> HttpResponse {
    match alias.as_str() {
        "backend-tls" => HttpResponse::Ok().json(json!({
            "status": "Active",
            "subject": "CN=backend.local",
            "validity": { "from": "2026-01-01", "to": "2027-01-01" }
        })),
        _ => HttpResponse::NotFound().json(json!({ "message": "No such certificate" })),
    }
}

async fn usage(alias: web::Path<String>) -> HttpResponse {
    match alias.as_str() {
        "backend-tls" => HttpResponse::Ok().json(json!({ "count": 3, "list": [] })),
        _ => HttpResponse::InternalServerError().finish(),
    }
}

async fn remove(alias: web::Path<String>) -> HttpResponse {
    match alias.as_str() {
        "backend-tls" | "legacy" => HttpResponse::Ok().finish(),
        _ => HttpResponse::NotFound().json(json!({ "description": "Certificate not found" })),
    }
}

async fn upload(body: web::Bytes) -> HttpResponse {
    let body = String::from_utf8_lossy(&body);
    if body.contains("name=\"alias\"") && body.contains("new-cert") && body.contains(PEM) {
        HttpResponse::Ok().json(json!({ "alias": "new-cert", "endpoint": "https://new.local" }))
    } else {
        HttpResponse::BadRequest().json(json!({ "message": "Malformed upload" }))
    }
}

fn stub_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/key-managers", web::get().to(key_managers))
        .route("/publisher/endpoint-certificates", web::get().to(certificates))
        .route("/publisher/endpoint-certificates", web::post().to(upload))
        .route("/publisher/endpoint-certificates/{alias}/usage", web::get().to(usage))
        .route("/publisher/endpoint-certificates/{alias}", web::get().to(certificate))
        .route("/publisher/endpoint-certificates/{alias}", web::delete().to(remove));
}

#[actix_web::test]
async fn test_server_functions_use_test_client() {
    let server = HttpServer::new(|| App::new().configure(stub_routes))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let client = AdminApiClient::new(AdminApiConfig {
        base_url: format!("http://{}/admin", addr),
        publisher_url: format!("http://{}/publisher", addr),
        ..AdminApiConfig::default()
    })
    .unwrap();
    set_test_client(client);

    // Key managers: server-side search and paging
    let page = list_key_managers(1, 1, "okta".to_string()).await.unwrap();
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].id, "km-3");

    // Certificates: rows are completed with usage and details
    let page = list_endpoint_certificates(10, 0, String::new()).await.unwrap();
    assert_eq!(page.pagination.total, 2);
    let backend = &page.list[0];
    assert_eq!(backend.usage_count, 3);
    assert_eq!(backend.status(), "Active");
    assert_eq!(
        backend.delete_prompt(),
        "backend-tls is used by 3 other APIs. Are you sure you want to delete backend-tls?"
    );

    // A failed usage or details lookup leaves that part empty
    let legacy = &page.list[1];
    assert_eq!(legacy.usage_count, 0);
    assert!(legacy.details.is_none());
    assert_eq!(legacy.details_text(), "Certificate details are not available.");

    let page = list_endpoint_certificates(10, 0, "LEGACY".to_string()).await.unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.list[0].alias, "legacy");

    delete_endpoint_certificate("backend-tls".to_string()).await.unwrap();
    let err = delete_endpoint_certificate("missing".to_string()).await.unwrap_err();
    assert!(err.to_string().contains("Certificate not found"));

    let saved = upload_endpoint_certificate(CertificateUpload {
        alias: " new-cert ".to_string(),
        endpoint: "https://new.local".to_string(),
        certificate: PEM.to_string(),
    })
    .await
    .unwrap();
    assert_eq!(saved.alias, "new-cert");

    // Rejected before any request is made
    let err = upload_endpoint_certificate(CertificateUpload {
        alias: "bad".to_string(),
        endpoint: "ftp://bad.local".to_string(),
        certificate: PEM.to_string(),
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("http or https"));

    handle.stop(true).await;
}

#[test]
fn test_certificate_path_encodes_alias() {
    assert_eq!(certificate_path("backend-tls"), "/endpoint-certificates/backend-tls");
    assert_eq!(certificate_path("a b/c"), "/endpoint-certificates/a%20b%2Fc");
}
