use std::time::Duration;

use anyhow::Result;
use urlsign_cdn::{Config, DefaultCredentialProvider, UrlSigner};
use urlsign_core::{Context, OsEnv, Signer};
use urlsign_file_read_tokio::TokioFileRead;

// Sample values for a CDN backend; override them with the URLSIGN_* env vars.
const URL_PREFIX: &str = "http://34.120.74.157";
const KEY_NAME: &str = "cdn-signing-key";
const KEY_VALUE: &str = "jGmZRNCXK6mtVKmJ4BpEYQ";
const URL_PATH: &str = "index.html";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let env_config = Config::from_env(&ctx);
    let mut config = Config::new()
        .with_url_prefix(env_config.url_prefix.as_deref().unwrap_or(URL_PREFIX))
        .with_ttl(env_config.ttl);
    if env_config.key_value.is_none() && env_config.key_file.is_none() {
        config = config.with_key_name(KEY_NAME).with_key_value(KEY_VALUE);
    }

    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::with_config(config.clone()),
        UrlSigner::from_config(&config)?,
    );

    let url = signer.sign(URL_PATH, None).await?;
    println!("Generated Signed URL:\n{url}");

    let short_lived = signer.sign(URL_PATH, Some(Duration::from_secs(60))).await?;
    println!("Generated Signed URL (60s):\n{short_lived}");

    Ok(())
}
