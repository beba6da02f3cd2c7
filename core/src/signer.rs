use crate::{Context, Error, ProvideCredential, Result, SignUrl, SigningCredential};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Signer is the main struct used to sign URLs.
///
/// The credential is loaded lazily on first use and cached until it
/// reports itself invalid.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignUrl<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignUrl<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential provider and drop any cached credential.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.loader = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Sign `url_path`, returning the full signed URL.
    pub async fn sign(&self, url_path: &str, expires_in: Option<Duration>) -> Result<String> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        let credential = match credential {
            Some(credential) if credential.is_valid() => credential,
            Some(_) => {
                return Err(Error::credential_invalid(
                    "loaded signing credential is not valid",
                ))
            }
            None => {
                return Err(Error::credential_invalid(
                    "no signing credential could be loaded",
                ))
            }
        };

        self.builder
            .sign_url(&self.ctx, url_path, expires_in, &credential)
    }
}
