// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::{Config, Credential};
use log::debug;
use std::time::Duration;
use urlsign_core::hash::{base64url_decode, base64url_hmac_sha1};
use urlsign_core::time::{self, DateTime};
use urlsign_core::{Context, Error, Result, SignUrl};

/// Build the string that gets signed.
///
/// No component is escaped: `url_path` and `key_name` must not contain
/// `?`, `&` or `=`, otherwise the edge server parses a different query.
pub fn canonical_string(url_prefix: &str, url_path: &str, expires: i64, key_name: &str) -> String {
    format!("{url_prefix}/{url_path}?{EXPIRES}={expires}&{KEY_NAME}={key_name}")
}

/// Decode a URL-safe base64 key whose trailing `=` padding may be missing.
///
/// A length that leaves a remainder of 1 modulo 4 can never be valid base64
/// and is rejected before decoding.
pub fn decode_key(key_value: &str) -> Result<Vec<u8>> {
    let padding = match key_value.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => {
            return Err(Error::key_encoding_invalid(format!(
                "signing key has invalid base64 length {}",
                key_value.len()
            )))
        }
    };

    base64url_decode(&format!("{key_value}{padding}"))
}

/// Sign `url_path` under `url_prefix`, taking `now` as the current time.
///
/// The URL expires `ttl` after `now`, or [`DEFAULT_TTL`] when `ttl` is `None`.
///
/// `ttl` is a [`Duration`] and so never negative: the earliest expiry this
/// produces is `now` itself, with `Duration::ZERO`. To get an already expired
/// URL, pass a `now` in the past instead.
pub fn sign_url_at(
    url_prefix: &str,
    url_path: &str,
    key_name: &str,
    key_value: &str,
    ttl: Option<Duration>,
    now: DateTime,
) -> Result<String> {
    let ttl = ttl.unwrap_or(DEFAULT_TTL);
    let expires = i64::try_from(ttl.as_secs())
        .ok()
        .and_then(|ttl| now.timestamp().checked_add(ttl))
        .ok_or_else(|| Error::config_invalid(format!("ttl {ttl:?} is out of range")))?;

    let string_to_sign = canonical_string(url_prefix, url_path, expires, key_name);
    debug!("string to sign: {string_to_sign}");

    let key = decode_key(key_value)?;
    let signature = base64url_hmac_sha1(&key, string_to_sign.as_bytes());

    Ok(format!("{string_to_sign}&{SIGNATURE}={signature}"))
}

/// Sign `url_path` under `url_prefix` with the system clock.
pub fn sign_url(
    url_prefix: &str,
    url_path: &str,
    key_name: &str,
    key_value: &str,
    ttl: Option<Duration>,
) -> Result<String> {
    sign_url_at(url_prefix, url_path, key_name, key_value, ttl, time::now())
}

/// UrlSigner signs paths under a fixed URL prefix.
///
/// The current time is read from [`Context::now`], so a context carrying a
/// static time source produces reproducible URLs.
#[derive(Debug, Clone)]
pub struct UrlSigner {
    url_prefix: String,
    ttl: Duration,
}

impl UrlSigner {
    /// Create a new signer for `url_prefix`, e.g. `https://cdn.example.com`.
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Create a new signer from config.
    ///
    /// Returns an error if `url_prefix` is not configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let url_prefix = config
            .url_prefix
            .clone()
            .ok_or_else(|| Error::config_invalid("url_prefix is required"))?;

        Ok(Self::new(url_prefix).with_ttl(config.ttl))
    }

    /// Set the lifetime used when the caller doesn't pass one.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl SignUrl for UrlSigner {
    type Credential = Credential;

    fn sign_url(
        &self,
        ctx: &Context,
        url_path: &str,
        expires_in: Option<Duration>,
        credential: &Self::Credential,
    ) -> Result<String> {
        sign_url_at(
            &self.url_prefix,
            url_path,
            &credential.key_name,
            &credential.key_value,
            Some(expires_in.unwrap_or(self.ttl)),
            ctx.now(),
        )
    }
}
