//! Core components for signing CDN URLs.
//!
//! This crate provides the foundational types and traits for the urlsign ecosystem.
//! It defines the abstractions that enable flexible key loading and URL signing.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for file reading, environment access and the clock
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and URL signing (`SignUrl`)
//! - **Signer**: The main orchestrator that coordinates credential loading and URL signing
//!
//! ## Example
//!
//! ```no_run
//! use urlsign_core::{Context, ProvideCredential, Result, SignUrl, Signer, SigningCredential};
//! use async_trait::async_trait;
//! use std::time::Duration;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyUrlSigner;
//!
//! impl SignUrl for MyUrlSigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_url(
//!         &self,
//!         ctx: &Context,
//!         url_path: &str,
//!         _expires_in: Option<Duration>,
//!         cred: &Self::Credential,
//!     ) -> Result<String> {
//!         Ok(format!("https://example.com/{url_path}?t={}", ctx.now().timestamp()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyUrlSigner);
//! let url = signer.sign("index.html", None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`Env`]: For environment variable access
//! - [`TimeSource`]: For reading the current time
//! - [`ProvideCredential`]: For loading signing keys from various sources
//! - [`SignUrl`]: For building service-specific signed URLs
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub use time::{StaticTimeSource, SystemTimeSource, TimeSource};
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignUrl, SigningCredential};
mod signer;
pub use signer::Signer;
