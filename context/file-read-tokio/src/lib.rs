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

//! Tokio-based file reading implementation for urlsign.
//!
//! `TokioFileRead` implements the `FileRead` trait from `urlsign_core` with
//! Tokio's file system operations, so signing keys stored in key files can be
//! loaded without blocking the runtime.
//!
//! ## Example
//!
//! ```no_run
//! use urlsign_core::{Context, OsEnv};
//! use urlsign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     match ctx.file_read("/etc/cdn/signing.key").await {
//!         Ok(content) => println!("read {} bytes", content.len()),
//!         Err(e) => eprintln!("failed to read key file: {e}"),
//!     }
//! }
//! ```

use async_trait::async_trait;
use urlsign_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use urlsign_core::{Context, ErrorKind};

    #[tokio::test]
    async fn test_read_key_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "jGmZRNCXK6mtVKmJ4BpEYQ").unwrap();

        let ctx = Context::new().with_file_read(TokioFileRead);
        let content = ctx
            .file_read_as_string(f.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(content, "jGmZRNCXK6mtVKmJ4BpEYQ\n");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.key");

        let err = TokioFileRead
            .file_read(path.to_str().unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
