//! CDN signed URL generator.
//!
//! Produces time-limited URLs of the form
//!
//! ```text
//! <url_prefix>/<url_path>?Expires=<unix seconds>&KeyName=<key name>&Signature=<signature>
//! ```
//!
//! where the signature is the unpadded URL-safe base64 of an HMAC-SHA1 over
//! everything before `&Signature=`. An edge server holding the same key can
//! verify the URL until it expires.
//!
//! ## Example
//!
//! ```no_run
//! use urlsign_cdn::{DefaultCredentialProvider, UrlSigner};
//! use urlsign_core::{Context, OsEnv, Signer};
//! use urlsign_file_read_tokio::TokioFileRead;
//!
//! # async fn example() -> urlsign_core::Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     UrlSigner::new("https://cdn.example.com"),
//! );
//!
//! let url = signer.sign("videos/intro.mp4", None).await?;
//! println!("{url}");
//! # Ok(())
//! # }
//! ```
//!
//! For one-off signing without a loader, use [`sign_url`] or, with a pinned
//! clock, [`sign_url_at`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::DEFAULT_TTL;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{canonical_string, decode_key, sign_url, sign_url_at, UrlSigner};

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, KeyFileCredentialProvider,
    StaticCredentialProvider,
};
