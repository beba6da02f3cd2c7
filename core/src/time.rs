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

//! Time related utils.

use crate::Error;
use chrono::Utc;
use std::fmt::Debug;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Create datetime from unix seconds.
///
/// Returns an error if the value is out of chrono's supported range.
pub fn from_timestamp(secs: i64) -> crate::Result<DateTime> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::unexpected(format!("timestamp {secs} is out of range")))
}

/// TimeSource is used to read the current time during signing.
///
/// Signers never read the system clock directly so that callers can pin
/// the clock in tests.
pub trait TimeSource: Debug + Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> DateTime;
}

/// SystemTimeSource reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime {
        now()
    }
}

/// StaticTimeSource always returns the same instant.
///
/// This is useful for testing or for reproducing a signature.
#[derive(Debug, Clone, Copy)]
pub struct StaticTimeSource {
    time: DateTime,
}

impl StaticTimeSource {
    /// Create a new StaticTimeSource that returns the given time.
    pub fn new(time: DateTime) -> Self {
        Self { time }
    }

    /// Create a new StaticTimeSource from unix seconds.
    pub fn from_timestamp(secs: i64) -> crate::Result<Self> {
        Ok(Self::new(from_timestamp(secs)?))
    }
}

impl TimeSource for StaticTimeSource {
    fn now(&self) -> DateTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_time_source() {
        let ts = StaticTimeSource::from_timestamp(1000).unwrap();

        assert_eq!(ts.now().timestamp(), 1000);
        assert_eq!(ts.now(), ts.now());
    }

    #[test]
    fn test_system_time_source_moves_forward() {
        let before = now();
        let current = SystemTimeSource.now();

        assert!(current >= before);
    }
}
