//! Kubernetes-style secret payloads served by DSM.
//!
//! DSM stores the database password base64-encoded under `data.password`.
//! Decoding errors never include the encoded or decoded value.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::SecretString;

use crate::error::{ClientError, Result};

/// Pull the encoded password out of a secret resource.
pub fn encoded_password(secret: &serde_json::Value) -> Option<&str> {
    secret["data"]["password"].as_str()
}

/// Decode a base64 (standard alphabet) password into UTF-8 text.
pub fn decode_secret_password(encoded: &str) -> Result<SecretString> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|_| ClientError::InvalidSecret("password is not valid base64".to_string()))?;
    let password = String::from_utf8(bytes)
        .map_err(|_| ClientError::InvalidSecret("password is not valid UTF-8".to_string()))?;
    Ok(SecretString::new(password.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_decode_secret_password() {
        let password = decode_secret_password("cEBzcw==").unwrap();
        assert_eq!(password.expose_secret(), "p@ss");
    }

    #[test]
    fn test_decode_rejects_invalid_base64_without_echoing_it() {
        let err = decode_secret_password("not base64!!").unwrap_err();
        assert!(matches!(err, ClientError::InvalidSecret(_)));
        assert!(!err.to_string().contains("not base64!!"));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        // 0xff 0xfe
        let err = decode_secret_password("//4=").unwrap_err();
        assert!(matches!(err, ClientError::InvalidSecret(ref m) if m.contains("UTF-8")));
    }

    #[test]
    fn test_encoded_password_lookup() {
        let secret = serde_json::json!({"data": {"password": "cEBzcw==", "username": "YWRtaW4="}});
        assert_eq!(encoded_password(&secret), Some("cEBzcw=="));
        assert_eq!(encoded_password(&serde_json::json!({"data": {}})), None);
        assert_eq!(encoded_password(&serde_json::json!({})), None);
    }

    proptest! {
        #[test]
        fn prop_base64_round_trip(password in "\\PC{0,64}") {
            let encoded = STANDARD.encode(password.as_bytes());
            let decoded = decode_secret_password(&encoded).unwrap();
            prop_assert_eq!(decoded.expose_secret(), password.as_str());
        }
    }
}
