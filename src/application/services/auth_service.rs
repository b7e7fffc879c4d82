//! Authentication service for admin API keys.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::domain::audit_event::ApiAccess;
use crate::error::AppError;

/// Validates `X-API-Key` values against a configured allow-list.
///
/// An empty allow-list disables the admin API entirely: every request is
/// rejected as unauthorized.
pub struct AuthService {
    api_keys: Vec<String>,
}

impl AuthService {
    /// Creates a service from the allow-list. Blank entries are ignored.
    pub fn new(api_keys: Vec<String>) -> Self {
        let api_keys = api_keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        Self { api_keys }
    }

    /// Classifies a presented key without producing an error.
    ///
    /// An empty key counts as no key.
    pub fn check(&self, api_key: Option<&str>) -> ApiAccess {
        match api_key {
            None | Some("") => ApiAccess::Unauthorized,
            Some(_) if self.api_keys.is_empty() => ApiAccess::Unauthorized,
            Some(key) if self.api_keys.iter().any(|k| k == key) => ApiAccess::Accessed,
            Some(_) => ApiAccess::Forbidden,
        }
    }

    /// Authenticates a presented key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no key was sent or no keys are
    /// configured, and [`AppError::Forbidden`] if the key is not in the list.
    pub fn authenticate(&self, api_key: Option<&str>) -> Result<(), AppError> {
        match self.check(api_key) {
            ApiAccess::Accessed => Ok(()),
            ApiAccess::Unauthorized => Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "X-API-Key header is missing or the API is disabled"}),
            )),
            ApiAccess::Forbidden => Err(AppError::forbidden(
                "Forbidden",
                json!({"reason": "Unknown API key"}),
            )),
        }
    }
}

/// Hashes an API key for audit records.
///
/// Returns the 64-character lowercase hex SHA-256 digest, or `"none"` when no
/// key (or an empty one) was presented.
pub fn hash_api_key(api_key: Option<&str>) -> String {
    match api_key {
        Some(key) if !key.is_empty() => hex::encode(Sha256::digest(key.as_bytes())),
        _ => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(vec!["alpha".to_string(), " beta ".to_string(), "".to_string()])
    }

    #[test]
    fn test_authenticate_success() {
        assert!(service().authenticate(Some("alpha")).is_ok());
        assert!(service().authenticate(Some("beta")).is_ok());
    }

    #[test]
    fn test_authenticate_missing_key() {
        let result = service().authenticate(None);
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_unknown_key() {
        let result = service().authenticate(Some("gamma"));
        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[test]
    fn test_blank_entries_are_not_keys() {
        assert_eq!(service().check(Some("")), ApiAccess::Unauthorized);
    }

    #[test]
    fn test_empty_key_is_unauthorized_and_hashes_to_none() {
        let result = service().authenticate(Some(""));
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
        assert_eq!(hash_api_key(Some("")), "none");
    }

    #[test]
    fn test_empty_allow_list_rejects_everything() {
        let service = AuthService::new(vec![]);
        assert_eq!(service.check(Some("alpha")), ApiAccess::Unauthorized);
        assert_eq!(service.check(None), ApiAccess::Unauthorized);
    }

    #[test]
    fn test_hash_api_key() {
        assert_eq!(hash_api_key(None), "none");
        assert_eq!(
            hash_api_key(Some("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_api_key_different_inputs() {
        let hash1 = hash_api_key(Some("token1"));
        let hash2 = hash_api_key(Some("token2"));

        assert_ne!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }
}
