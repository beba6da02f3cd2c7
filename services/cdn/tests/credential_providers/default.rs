use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use urlsign_cdn::{Config, DefaultCredentialProvider, UrlSigner};
use urlsign_core::{Context, ProvideCredential, Signer, StaticEnv, StaticTimeSource};
use urlsign_file_read_tokio::TokioFileRead;

use crate::init_logger;

#[tokio::test]
async fn test_default_provider_reads_key_file() -> Result<()> {
    init_logger();

    let mut f = tempfile::NamedTempFile::new()?;
    writeln!(f, "jGmZRNCXK6mtVKmJ4BpEYQ")?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                ("URLSIGN_KEY_NAME".to_string(), "cdn-signing-key".to_string()),
                (
                    "URLSIGN_KEY_FILE".to_string(),
                    f.path().to_string_lossy().to_string(),
                ),
            ]),
        });

    let cred = DefaultCredentialProvider::new()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.key_name, "cdn-signing-key");
    assert_eq!(cred.key_value, "jGmZRNCXK6mtVKmJ4BpEYQ");
    Ok(())
}

#[tokio::test]
async fn test_signer_from_env_config() -> Result<()> {
    init_logger();

    let ctx = Context::new()
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (
                    "URLSIGN_URL_PREFIX".to_string(),
                    "http://34.120.74.157".to_string(),
                ),
                ("URLSIGN_KEY_NAME".to_string(), "cdn-signing-key".to_string()),
                (
                    "URLSIGN_KEY_VALUE".to_string(),
                    "jGmZRNCXK6mtVKmJ4BpEYQ".to_string(),
                ),
            ]),
        })
        .with_time_source(StaticTimeSource::from_timestamp(1000)?);

    let config = Config::from_env(&ctx);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::with_config(config.clone()),
        UrlSigner::from_config(&config)?,
    );

    let url = signer.sign("index.html", None).await?;
    assert_eq!(
        url,
        "http://34.120.74.157/index.html?Expires=4600&KeyName=cdn-signing-key&Signature=ckhL4X7BUuwtbPRslBP10GhYP1U"
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> Result<()> {
    init_logger();

    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::new(),
        UrlSigner::new("http://34.120.74.157"),
    );

    let err = signer.sign("index.html", None).await.unwrap_err();
    assert!(err.is_credential_error());
    Ok(())
}

#[tokio::test]
async fn test_signer_falls_back_to_key_file_on_empty_key_value() -> Result<()> {
    init_logger();

    let mut f = tempfile::NamedTempFile::new()?;
    writeln!(f, "jGmZRNCXK6mtVKmJ4BpEYQ")?;

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                ("URLSIGN_URL_PREFIX".to_string(), "http://h".to_string()),
                ("URLSIGN_KEY_NAME".to_string(), "k".to_string()),
                ("URLSIGN_KEY_VALUE".to_string(), "".to_string()),
                (
                    "URLSIGN_KEY_FILE".to_string(),
                    f.path().to_string_lossy().to_string(),
                ),
            ]),
        })
        .with_time_source(StaticTimeSource::from_timestamp(1000)?);

    let config = Config::from_env(&ctx);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::with_config(config.clone()),
        UrlSigner::from_config(&config)?,
    );

    let url = signer.sign("index.html", None).await?;
    assert_eq!(
        url,
        "http://h/index.html?Expires=4600&KeyName=k&Signature=vU8cpVBleuG60r6Ps10BBZsC6Ok"
    );
    Ok(())
}
