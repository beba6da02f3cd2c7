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

use std::time::Duration;

// Env values used by the cdn signer.
pub const URLSIGN_URL_PREFIX: &str = "URLSIGN_URL_PREFIX";
pub const URLSIGN_KEY_NAME: &str = "URLSIGN_KEY_NAME";
pub const URLSIGN_KEY_VALUE: &str = "URLSIGN_KEY_VALUE";
pub const URLSIGN_KEY_FILE: &str = "URLSIGN_KEY_FILE";
pub const URLSIGN_TTL: &str = "URLSIGN_TTL";

// Query parameters of a signed URL, in the order they are emitted.
pub const EXPIRES: &str = "Expires";
pub const KEY_NAME: &str = "KeyName";
pub const SIGNATURE: &str = "Signature";

/// Lifetime of a signed URL when the caller doesn't pick one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);
