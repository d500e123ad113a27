use bcrypt::{hash, verify};

use crate::utils::errors::OpsError;

/// Cost factor the backend's login verifier was provisioned with. Hashes at
/// any other cost still verify, but new accounts should match the fleet.
pub const HASH_COST: u32 = 10;

/// Checks the backend's password-strength rules, in order: length, uppercase,
/// lowercase, digit. The first failing rule is the one reported.
pub fn validate_password(password: &str) -> Result<(), OpsError> {
    if password.chars().count() < 8 {
        return Err(OpsError::Validation(
            "password must be at least 8 characters long".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(OpsError::Validation(
            "password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(OpsError::Validation(
            "password must contain at least one lowercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(OpsError::Validation(
            "password must contain at least one digit".to_string(),
        ));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, OpsError> {
    hash(password, HASH_COST)
        .map_err(|e| OpsError::Internal(format!("failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, OpsError> {
    verify(password, hashed)
        .map_err(|e| OpsError::Internal(format!("failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<(), OpsError>) -> String {
        match result {
            Err(OpsError::Validation(reason)) => reason,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_password_meeting_all_rules() {
        assert!(validate_password("Abc12345").is_ok());
    }

    #[test]
    fn rejects_short_password_with_length_reason() {
        assert!(reason(validate_password("abc")).contains("8 characters"));
    }

    #[test]
    fn length_is_checked_before_character_classes() {
        // "abc" also lacks uppercase and digits; length must win.
        assert!(reason(validate_password("abc")).contains("8 characters"));
    }

    #[test]
    fn rejects_missing_uppercase() {
        assert!(reason(validate_password("abc12345")).contains("uppercase"));
    }

    #[test]
    fn rejects_missing_lowercase() {
        assert!(reason(validate_password("ABC12345")).contains("lowercase"));
    }

    #[test]
    fn rejects_missing_digit() {
        assert!(reason(validate_password("Abcdefgh")).contains("digit"));
    }

    #[test]
    fn hash_verifies_against_original_password() {
        let hashed = hash_password("Abc12345").unwrap();
        assert!(verify_password("Abc12345", &hashed).unwrap());
        assert!(!verify_password("Abc12346", &hashed).unwrap());
    }

    #[test]
    fn two_hashes_of_same_password_differ() {
        let first = hash_password("Abc12345").unwrap();
        let second = hash_password("Abc12345").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("Abc12345", &first).unwrap());
        assert!(verify_password("Abc12345", &second).unwrap());
    }

    #[test]
    fn hash_carries_the_configured_cost() {
        let hashed = hash_password("Abc12345").unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(hashed.contains("$10$"));
    }
}
