// web_app/certificate.rs - Certificate editor state
//
// A key manager carries one certificate: either a PEM document (stored
// base64-encoded) or a JWKS endpoint URL (stored verbatim). The editor
// remembers the last value entered for each type so toggling between
// them does not lose input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CertificateType {
    #[default]
    Pem,
    Jwks,
}

impl std::fmt::Display for CertificateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertificateType::Pem => write!(f, "PEM"),
            CertificateType::Jwks => write!(f, "JWKS"),
        }
    }
}

/// Certificate as exchanged with the admin API: `{ "type": "PEM", "value": "..." }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateValue {
    #[serde(rename = "type")]
    pub kind: CertificateType,
    #[serde(default)]
    pub value: String,
}

/// How PEM content is being entered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputTab {
    #[default]
    Paste,
    Upload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateEvent {
    SelectType(CertificateType),
    SelectTab(InputTab),
    PastePem(String),
    UploadPem { file_name: String, contents: String },
    SetJwksUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateEditor {
    current: CertificateValue,
    pem_cache: String,
    jwks_cache: String,
    jwks_allowed: bool,
    tab: InputTab,
    uploaded_file: Option<String>,
}

impl CertificateEditor {
    pub fn new(initial: CertificateValue, jwks_allowed: bool) -> Self {
        let mut current = initial;
        if !jwks_allowed && current.kind == CertificateType::Jwks {
            current = CertificateValue::default();
        }

        let mut editor = Self {
            current: CertificateValue::default(),
            pem_cache: String::new(),
            jwks_cache: String::new(),
            jwks_allowed,
            tab: InputTab::default(),
            uploaded_file: None,
        };
        editor.store(current);
        editor
    }

    /// Apply one edit and return the value the owning form should keep
    pub fn apply(&mut self, event: CertificateEvent) -> CertificateValue {
        match event {
            CertificateEvent::SelectType(kind) => {
                if kind == CertificateType::Jwks && !self.jwks_allowed {
                    tracing::debug!("JWKS certificates are not enabled for this key manager type");
                } else {
                    let value = self.cached(kind).to_string();
                    self.current = CertificateValue { kind, value };
                }
            }
            CertificateEvent::SelectTab(tab) => self.tab = tab,
            CertificateEvent::PastePem(text) => {
                if self.current.kind == CertificateType::Pem {
                    self.store(CertificateValue {
                        kind: CertificateType::Pem,
                        value: encode_pem(&text),
                    });
                }
            }
            CertificateEvent::UploadPem {
                file_name,
                contents,
            } => {
                if self.current.kind == CertificateType::Pem {
                    self.uploaded_file = Some(file_name);
                    self.store(CertificateValue {
                        kind: CertificateType::Pem,
                        value: encode_pem(&contents),
                    });
                }
            }
            CertificateEvent::SetJwksUrl(url) => {
                if self.current.kind == CertificateType::Jwks {
                    self.store(CertificateValue {
                        kind: CertificateType::Jwks,
                        value: url,
                    });
                }
            }
        }
        self.current.clone()
    }

    pub fn value(&self) -> &CertificateValue {
        &self.current
    }

    pub fn jwks_allowed(&self) -> bool {
        self.jwks_allowed
    }

    pub fn tab(&self) -> InputTab {
        self.tab
    }

    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    /// Decoded PEM text for the paste box; empty when not PEM or not decodable
    pub fn pem_text(&self) -> String {
        match self.current.kind {
            CertificateType::Pem => decode_pem(&self.current.value).unwrap_or_default(),
            CertificateType::Jwks => String::new(),
        }
    }

    fn cached(&self, kind: CertificateType) -> &str {
        match kind {
            CertificateType::Pem => &self.pem_cache,
            CertificateType::Jwks => &self.jwks_cache,
        }
    }

    fn store(&mut self, value: CertificateValue) {
        match value.kind {
            CertificateType::Pem => self.pem_cache = value.value.clone(),
            CertificateType::Jwks => self.jwks_cache = value.value.clone(),
        }
        self.current = value;
    }
}

pub fn encode_pem(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode_pem(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    String::from_utf8(bytes).ok()
}
