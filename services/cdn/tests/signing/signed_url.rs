use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use test_case::test_case;
use urlsign_cdn::{sign_url_at, StaticCredentialProvider, UrlSigner};
use urlsign_core::time::from_timestamp;
use urlsign_core::{Context, ErrorKind, Signer, StaticTimeSource};

use crate::init_logger;

const URL_PREFIX: &str = "https://cdn.example.com";
const URL_PATH: &str = "videos/intro.mp4";
const KEY_NAME: &str = "my-key";
const KEY_VALUE: &str = "nZtRohdNF9m3cKM24IcK4w";

fn signer_at(now: i64) -> Signer<urlsign_cdn::Credential> {
    let ctx = Context::new().with_time_source(
        StaticTimeSource::from_timestamp(now).expect("timestamp must be valid"),
    );
    Signer::new(
        ctx,
        StaticCredentialProvider::new(KEY_NAME, KEY_VALUE),
        UrlSigner::new(URL_PREFIX),
    )
}

/// Split a signed URL into the part before `?` and its query pairs.
fn split_url(url: &str) -> (&str, Vec<(String, String)>) {
    let (base, query) = url.split_once('?').expect("signed url must have a query");
    let pairs = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    (base, pairs)
}

#[tokio::test]
async fn test_signed_url_known_answer() -> Result<()> {
    init_logger();

    let url = signer_at(1_700_000_000).sign(URL_PATH, None).await?;

    assert_eq!(
        url,
        "https://cdn.example.com/videos/intro.mp4?Expires=1700003600&KeyName=my-key&Signature=M7O6wiw602GeruYdZpF5i-Nljk4"
    );
    Ok(())
}

#[tokio::test]
async fn test_signed_url_is_deterministic() -> Result<()> {
    init_logger();

    let signer = signer_at(1_700_000_000);
    let first = signer.sign(URL_PATH, None).await?;
    let second = signer.sign(URL_PATH, None).await?;
    let other = signer_at(1_700_000_000).sign(URL_PATH, None).await?;

    assert_eq!(first, second);
    assert_eq!(first, other);
    Ok(())
}

#[tokio::test]
async fn test_signed_url_expiry_arithmetic() -> Result<()> {
    init_logger();

    let url = signer_at(1000)
        .sign(URL_PATH, Some(Duration::from_secs(3600)))
        .await?;

    let (_, pairs) = split_url(&url);
    assert_eq!(pairs[0], ("Expires".to_string(), "4600".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_signed_url_structure() -> Result<()> {
    init_logger();

    let url = signer_at(1000).sign(URL_PATH, None).await?;

    let (base, pairs) = split_url(&url);
    assert_eq!(base, format!("{URL_PREFIX}/{URL_PATH}"));
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Expires", "KeyName", "Signature"]);
    assert_eq!(pairs[1].1, KEY_NAME);
    assert_eq!(pairs[2].1.len(), 27);
    Ok(())
}

#[test_case(0; "epoch")]
#[test_case(1000; "small")]
#[test_case(1_700_000_000; "recent")]
#[test_case(4_102_444_800; "year 2100")]
fn test_signature_has_no_padding(now: i64) {
    for path in ["a", "index.html", "videos/intro.mp4", "deep/nested/path/file.bin"] {
        let url = sign_url_at(
            URL_PREFIX,
            path,
            KEY_NAME,
            KEY_VALUE,
            None,
            from_timestamp(now).expect("timestamp must be valid"),
        )
        .expect("sign must success");

        let signature = url.rsplit("&Signature=").next().unwrap();
        assert!(!signature.ends_with('='), "padding leaked in {url}");
        assert!(!signature.contains('+') && !signature.contains('/'));
    }
}

#[test_case("nZtRohdNF9m3cKM24IcK4w"; "unpadded")]
#[test_case("nZtRohdNF9m3cKM24IcK4w=="; "padded")]
fn test_padded_and_unpadded_keys_sign_the_same(key_value: &str) {
    let now = from_timestamp(1_700_000_000).expect("timestamp must be valid");

    let url = sign_url_at(URL_PREFIX, URL_PATH, KEY_NAME, key_value, None, now)
        .expect("sign must success");

    assert!(url.ends_with("&Signature=M7O6wiw602GeruYdZpF5i-Nljk4"));
}

#[tokio::test]
async fn test_signed_url_with_invalid_key() -> Result<()> {
    init_logger();

    let signer = signer_at(1000)
        .with_credential_provider(StaticCredentialProvider::new(KEY_NAME, "nZtRohdNF9m3cKM24IcK4"));

    let err = signer.sign(URL_PATH, None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyEncodingInvalid);
    Ok(())
}
