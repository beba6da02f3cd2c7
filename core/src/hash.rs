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

//! Hash related utils.

use crate::Error;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

/// URL-safe engine that requires canonical padding but tolerates non-zero
/// trailing bits, matching what most key generators emit.
const BASE64_URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// URL-safe base64 encode without `=` padding.
pub fn base64url_encode_no_pad(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// URL-safe base64 decode.
///
/// Input must be padded to a multiple of 4. Invalid characters or lengths
/// are reported as [`crate::ErrorKind::KeyEncodingInvalid`].
pub fn base64url_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_URL_SAFE_LENIENT
        .decode(content)
        .map_err(|e| Error::key_encoding_invalid("base64url decode failed").with_source(e))
}

/// HMAC with SHA1 hash.
pub fn hmac_sha1(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// URL-safe base64 encoded HMAC with SHA1 hash, without padding.
pub fn base64url_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    base64url_encode_no_pad(&hmac_sha1(key, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hmac_sha1() {
        let digest = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog");

        assert_eq!(digest.len(), 20);
        assert_eq!(
            hex::encode(digest),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn test_base64url_hmac_sha1() {
        let key = hex::decode("8c699944d0972ba9ad54a989e01a4461").unwrap();
        let sig = base64url_hmac_sha1(
            &key,
            b"http://34.120.74.157/index.html?Expires=4600&KeyName=cdn-signing-key",
        );

        assert_eq!(sig, "ckhL4X7BUuwtbPRslBP10GhYP1U");
    }

    #[test]
    fn test_base64url_decode() {
        assert_eq!(
            base64url_decode("AQID_-8=").unwrap(),
            vec![0x01, 0x02, 0x03, 0xff, 0xef]
        );
    }

    #[test]
    fn test_base64url_decode_rejects_standard_alphabet() {
        let err = base64url_decode("+/8=").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::KeyEncodingInvalid);
    }

    #[test]
    fn test_base64url_decode_requires_padding() {
        let err = base64url_decode("AQID_-8").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::KeyEncodingInvalid);
    }
}
