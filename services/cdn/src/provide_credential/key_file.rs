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
use crate::Credential;
use async_trait::async_trait;
use log::debug;
use urlsign_core::{Context, Error, ProvideCredential, Result};

/// KeyFileCredentialProvider loads the signing key from a key file.
///
/// The file holds the URL-safe base64 encoded key and nothing else; surrounding
/// whitespace is ignored. Key name and path fall back to the `URLSIGN_KEY_NAME`
/// and `URLSIGN_KEY_FILE` environment variables when not set explicitly.
#[derive(Debug, Default, Clone)]
pub struct KeyFileCredentialProvider {
    key_name: Option<String>,
    path: Option<String>,
}

impl KeyFileCredentialProvider {
    /// Create a new KeyFileCredentialProvider driven by environment variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key name.
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    /// Set the key file path. A leading `~` is expanded to the home dir.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for KeyFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key_name = self
            .key_name
            .clone()
            .or_else(|| ctx.env_var(URLSIGN_KEY_NAME));
        let path = self.path.clone().or_else(|| ctx.env_var(URLSIGN_KEY_FILE));

        let (Some(key_name), Some(path)) = (key_name, path) else {
            return Ok(None);
        };

        let path = ctx.expand_home_dir(&path).ok_or_else(|| {
            Error::config_invalid(format!("failed to expand home dir in key file {path}"))
        })?;

        debug!("loading signing key {key_name} from key file {path}");
        let content = ctx.file_read_as_string(&path).await?;
        let key_value = content.trim();
        if key_value.is_empty() {
            return Err(Error::credential_invalid(format!(
                "key file {path} is empty"
            )));
        }

        Ok(Some(Credential::new(key_name, key_value)))
    }
}
