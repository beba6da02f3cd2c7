use crate::provide_credential::{
    EnvCredentialProvider, KeyFileCredentialProvider, StaticCredentialProvider,
};
use crate::{Config, Credential};
use async_trait::async_trait;
use urlsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider tries every known source of a signing key.
///
/// The sources are tried in the following order:
/// 1. Key name and key value set on the [`Config`], when both are non-empty
/// 2. `URLSIGN_KEY_NAME` and `URLSIGN_KEY_VALUE` environment variables
/// 3. A key file, from the [`Config`] or `URLSIGN_KEY_FILE`
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider that reads from the environment only.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new DefaultCredentialProvider that prefers values from `config`.
    pub fn with_config(config: Config) -> Self {
        let mut chain = ProvideCredentialChain::new();

        match (config.key_name.as_deref(), config.key_value.as_deref()) {
            (Some(key_name), Some(key_value)) if !key_name.is_empty() && !key_value.is_empty() => {
                chain = chain.push(StaticCredentialProvider::new(key_name, key_value));
            }
            _ => {}
        }

        chain = chain.push(EnvCredentialProvider::new());

        let mut key_file = KeyFileCredentialProvider::new();
        if let Some(key_name) = config.key_name {
            key_file = key_file.with_key_name(key_name);
        }
        if let Some(path) = config.key_file {
            key_file = key_file.with_path(path);
        }
        chain = chain.push(key_file);

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
