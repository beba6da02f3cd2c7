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
use urlsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the signing key from environment variables.
///
/// This provider looks for the following environment variables:
/// - `URLSIGN_KEY_NAME`: The name of the key registered on the CDN
/// - `URLSIGN_KEY_VALUE`: The URL-safe base64 encoded key
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(URLSIGN_KEY_NAME), envs.get(URLSIGN_KEY_VALUE)) {
            (Some(key_name), Some(key_value)) if !key_name.is_empty() && !key_value.is_empty() => {
                debug!("loading signing key {key_name} from environment variables");
                Ok(Some(Credential::new(key_name, key_value)))
            }
            _ => Ok(None),
        }
    }
}
