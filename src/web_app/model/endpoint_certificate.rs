// web_app/model/endpoint_certificate.rs - Backend endpoint certificates
//
// Certificates the gateway trusts when calling a backend endpoint, keyed
// by alias. The publisher API lists only alias and endpoint; the server
// adds usage counts and certificate details for the rows it returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// One entry of `GET /endpoint-certificates`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateMetadata {
    pub alias: String,
    #[serde(default)]
    pub endpoint: String,
}

impl CertificateMetadata {
    /// Case-insensitive match on alias and endpoint
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.alias.to_lowercase().contains(&term)
            || self.endpoint.to_lowercase().contains(&term)
    }
}

/// Listing body: `{ count, certificates }`, or a bare array
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CertificateListing {
    Bare(Vec<CertificateMetadata>),
    Envelope {
        #[serde(default)]
        certificates: Vec<CertificateMetadata>,
    },
}

impl CertificateListing {
    pub fn into_certificates(self) -> Vec<CertificateMetadata> {
        match self {
            CertificateListing::Bare(certificates)
            | CertificateListing::Envelope { certificates } => certificates,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateValidity {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// `GET /endpoint-certificates/{alias}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDetails {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub validity: Option<CertificateValidity>,
}

/// `GET /endpoint-certificates/{alias}/usage`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CertificateUsage {
    #[serde(default)]
    pub count: u64,
}

/// Row of the endpoint certificate list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointCertificate {
    pub alias: String,
    pub endpoint: String,
    /// Number of APIs using the certificate
    pub usage_count: u64,
    /// Missing when the details call failed
    pub details: Option<CertificateDetails>,
}

impl EndpointCertificate {
    pub fn new(
        metadata: CertificateMetadata,
        usage_count: u64,
        details: Option<CertificateDetails>,
    ) -> Self {
        Self {
            alias: metadata.alias,
            endpoint: metadata.endpoint,
            usage_count,
            details,
        }
    }

    pub fn status(&self) -> &str {
        self.details
            .as_ref()
            .map(|d| d.status.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }

    /// Confirmation text; warns when other APIs still use the certificate
    pub fn delete_prompt(&self) -> String {
        let question = format!("Are you sure you want to delete {}?", self.alias);
        if self.usage_count > 1 {
            format!(
                "{} is used by {} other APIs. {}",
                self.alias, self.usage_count, question
            )
        } else {
            question
        }
    }

    /// Detail lines shown when the row is opened
    pub fn details_text(&self) -> String {
        let Some(details) = &self.details else {
            return "Certificate details are not available.".to_string();
        };
        let mut lines = vec![
            format!("Status: {}", self.status()),
            format!("Subject: {}", details.subject),
        ];
        if let Some(validity) = &details.validity {
            lines.push(format!("Valid from {} to {}", validity.from, validity.to));
        }
        lines.join("\n")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Alias is required")]
    MissingAlias,

    #[error("Endpoint must be an http or https URL")]
    InvalidEndpoint,

    #[error("Certificate must be a PEM encoded X.509 certificate")]
    NotPem,
}

/// New endpoint certificate; `certificate` is the PEM text
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateUpload {
    pub alias: String,
    pub endpoint: String,
    pub certificate: String,
}

impl CertificateUpload {
    /// Trimmed copy, or the first problem found
    pub fn validated(&self) -> Result<Self, UploadError> {
        let alias = self.alias.trim();
        if alias.is_empty() {
            return Err(UploadError::MissingAlias);
        }

        let endpoint = self.endpoint.trim();
        let has_host = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(UploadError::InvalidEndpoint);
        }

        let certificate = self.certificate.trim();
        if !certificate.starts_with(PEM_BEGIN) || !certificate.ends_with(PEM_END) {
            return Err(UploadError::NotPem);
        }

        Ok(Self {
            alias: alias.to_string(),
            endpoint: endpoint.to_string(),
            certificate: certificate.to_string(),
        })
    }
}
