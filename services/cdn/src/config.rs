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
use log::warn;
use std::fmt::{Debug, Formatter};
use std::time::Duration;
use urlsign_core::utils::Redact;
use urlsign_core::Context;

/// Config carries all the configuration for CDN URL signing.
#[derive(Clone)]
pub struct Config {
    /// Scheme and host (optionally a base path) the signed path is appended to,
    /// e.g. `https://cdn.example.com`.
    pub url_prefix: Option<String>,
    /// Name of the signing key registered on the CDN.
    pub key_name: Option<String>,
    /// URL-safe base64 encoded signing key.
    pub key_value: Option<String>,
    /// Path to a file holding the URL-safe base64 encoded signing key.
    pub key_file: Option<String>,
    /// Lifetime of signed URLs.
    pub ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_prefix: None,
            key_name: None,
            key_value: None,
            key_file: None,
            ttl: DEFAULT_TTL,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("url_prefix", &self.url_prefix)
            .field("key_name", &self.key_name)
            .field("key_value", &Redact::from(&self.key_value))
            .field("key_file", &self.key_file)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL prefix.
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(url_prefix.into());
        self
    }

    /// Set the key name.
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    /// Set the key value.
    pub fn with_key_value(mut self, key_value: impl Into<String>) -> Self {
        self.key_value = Some(key_value.into());
        self
    }

    /// Set the key file path.
    pub fn with_key_file(mut self, key_file: impl Into<String>) -> Self {
        self.key_file = Some(key_file.into());
        self
    }

    /// Set the lifetime of signed URLs.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Load config from environment variables.
    ///
    /// `URLSIGN_TTL` is read as whole seconds; an unparsable value is ignored.
    pub fn from_env(ctx: &Context) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = ctx.env_var(URLSIGN_URL_PREFIX) {
            cfg.url_prefix = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_KEY_NAME) {
            cfg.key_name = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_KEY_VALUE) {
            cfg.key_value = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_KEY_FILE) {
            cfg.key_file = Some(v);
        }

        if let Some(v) = ctx.env_var(URLSIGN_TTL) {
            match v.trim().parse::<u64>() {
                Ok(secs) => cfg.ttl = Duration::from_secs(secs),
                Err(e) => warn!("ignoring invalid {URLSIGN_TTL} value {v:?}: {e}"),
            }
        }

        cfg
    }
}
