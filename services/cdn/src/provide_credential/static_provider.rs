use crate::Credential;
use async_trait::async_trait;
use urlsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a signing key known at initialization time.
///
/// This provider is used when the key name and key value are already at hand,
/// for example read from deployment outputs.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with key name and URL-safe base64 key value.
    pub fn new(key_name: &str, key_value: &str) -> Self {
        Self {
            credential: Credential::new(key_name, key_value),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
