//! Account data models for provisioning.
//!
//! [`AccountSpec`] carries the target attributes of an upsert;
//! [`AccountRecord`] is what comes back from the `users` table afterwards.
//! Roles and statuses mirror the backend's enumerations and are stored as
//! their `SCREAMING_SNAKE_CASE` text forms.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Roles recognized by the backend's `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    ShopOwner,
    DeliveryPartner,
    Customer,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::ShopOwner => "SHOP_OWNER",
            UserRole::DeliveryPartner => "DELIVERY_PARTNER",
            UserRole::Customer => "CUSTOMER",
            UserRole::User => "USER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            "ADMIN" => Ok(UserRole::Admin),
            "SHOP_OWNER" => Ok(UserRole::ShopOwner),
            "DELIVERY_PARTNER" => Ok(UserRole::DeliveryPartner),
            "CUSTOMER" => Ok(UserRole::Customer),
            "USER" => Ok(UserRole::User),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Account statuses recognized by the backend's `users.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    PendingVerification,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::PendingVerification => "PENDING_VERIFICATION",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target attributes for an account upsert.
#[derive(Debug, Clone, Validate)]
pub struct AccountSpec {
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// Bcrypt hash, never a plaintext password.
    pub password_hash: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub mobile_number: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub is_active: bool,
    pub email_verified: bool,
    pub mobile_verified: bool,
    pub two_factor_enabled: bool,
    pub is_temporary_password: bool,
    pub password_change_required: bool,
    /// Recorded in the `created_by`/`updated_by` audit columns.
    pub actor: String,
}

impl AccountSpec {
    /// The superadmin account the backend expects, minus the credential hash.
    pub fn superadmin(password_hash: String) -> Self {
        Self {
            username: "superadmin".to_string(),
            email: "superadmin@shopmanagement.com".to_string(),
            password_hash,
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            mobile_number: "9999999999".to_string(),
            role: UserRole::SuperAdmin,
            status: UserStatus::Active,
            is_active: true,
            email_verified: true,
            mobile_verified: false,
            two_factor_enabled: false,
            is_temporary_password: false,
            password_change_required: false,
            actor: "system".to_string(),
        }
    }
}

/// Row read back from the `users` table after provisioning.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AccountRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub status: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of one provisioning run.
#[derive(Debug)]
pub struct ProvisionOutcome {
    /// Whether a matching record existed before the upsert (update branch).
    pub found_before: bool,
    pub record: AccountRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn role_round_trips_through_text() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::Admin,
            UserRole::ShopOwner,
            UserRole::DeliveryPartner,
            UserRole::Customer,
            UserRole::User,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(
            "super_admin".parse::<UserRole>().unwrap(),
            UserRole::SuperAdmin
        );
        assert!("OVERLORD".parse::<UserRole>().is_err());
    }

    #[test]
    fn superadmin_spec_matches_backend_expectations() {
        let spec = AccountSpec::superadmin("$2b$10$hash".to_string());
        assert_eq!(spec.username, "superadmin");
        assert_eq!(spec.email, "superadmin@shopmanagement.com");
        assert_eq!(spec.role, UserRole::SuperAdmin);
        assert_eq!(spec.status, UserStatus::Active);
        assert!(spec.is_active);
        assert!(spec.email_verified);
        assert!(!spec.two_factor_enabled);
        assert_eq!(spec.actor, "system");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn spec_validation_rejects_bad_email() {
        let mut spec = AccountSpec::superadmin("$2b$10$hash".to_string());
        spec.email = "not-an-email".to_string();
        assert!(spec.validate().is_err());
    }
}
