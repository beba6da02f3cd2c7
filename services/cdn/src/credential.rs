use std::fmt::{Debug, Formatter};
use urlsign_core::utils::Redact;
use urlsign_core::SigningCredential;

/// Credential is the named signing key shared with the CDN.
#[derive(Default, Clone)]
pub struct Credential {
    /// Name of the key as registered on the CDN, sent as `KeyName`.
    pub key_name: String,
    /// URL-safe base64 encoded key, with or without `=` padding.
    pub key_value: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(key_name: impl Into<String>, key_value: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            key_value: key_value.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_name", &self.key_name)
            .field("key_value", &Redact::from(&self.key_value))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.key_name.is_empty() && !self.key_value.is_empty()
    }
}
