use sqlx::PgPool;
use tracing::{info, instrument};
use validator::Validate;

use crate::modules::provision::model::{AccountRecord, AccountSpec, ProvisionOutcome, UserRole};
use crate::utils::errors::OpsError;

const ACCOUNT_COLUMNS: &str = "id, username, email, first_name, last_name, role, status, \
     is_active, email_verified, created_at, updated_at";

/// Upserts the account described by `spec`, keyed on the unique username.
///
/// The insert-or-update is a single statement, so two concurrent runs cannot
/// interleave between an existence check and the write; last commit wins.
/// After the upsert commits, the record is read back for verification.
#[instrument(skip(pool, spec), fields(username = %spec.username))]
pub async fn provision(pool: &PgPool, spec: &AccountSpec) -> Result<ProvisionOutcome, OpsError> {
    spec.validate()
        .map_err(|e| OpsError::Validation(e.to_string()))?;

    // xmax is zero on a freshly inserted row and nonzero when the conflict
    // branch updated an existing one.
    let inserted: bool = sqlx::query_scalar(
        r#"
        INSERT INTO users (
            username, email, password, first_name, last_name, mobile_number,
            role, status, is_active, email_verified, mobile_verified,
            two_factor_enabled, is_temporary_password, password_change_required,
            failed_login_attempts, created_at, updated_at, created_by, updated_by
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
            0, NOW(), NOW(), $15, $15
        )
        ON CONFLICT (username) DO UPDATE SET
            email = EXCLUDED.email,
            password = EXCLUDED.password,
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            mobile_number = EXCLUDED.mobile_number,
            role = EXCLUDED.role,
            status = EXCLUDED.status,
            is_active = EXCLUDED.is_active,
            email_verified = EXCLUDED.email_verified,
            mobile_verified = EXCLUDED.mobile_verified,
            two_factor_enabled = EXCLUDED.two_factor_enabled,
            is_temporary_password = EXCLUDED.is_temporary_password,
            password_change_required = EXCLUDED.password_change_required,
            failed_login_attempts = 0,
            updated_at = NOW(),
            updated_by = EXCLUDED.updated_by
        RETURNING (xmax = 0) AS inserted
        "#,
    )
    .bind(&spec.username)
    .bind(&spec.email)
    .bind(&spec.password_hash)
    .bind(&spec.first_name)
    .bind(&spec.last_name)
    .bind(&spec.mobile_number)
    .bind(spec.role.as_str())
    .bind(spec.status.as_str())
    .bind(spec.is_active)
    .bind(spec.email_verified)
    .bind(spec.mobile_verified)
    .bind(spec.two_factor_enabled)
    .bind(spec.is_temporary_password)
    .bind(spec.password_change_required)
    .bind(&spec.actor)
    .fetch_one(pool)
    .await?;
    let found_before = !inserted;

    let record = fetch_account(pool, &spec.username, &spec.email)
        .await?
        .ok_or_else(|| {
            OpsError::Verification(format!(
                "user '{}' missing after committed upsert",
                spec.username
            ))
        })?;

    info!(
        found_before,
        id = record.id,
        "account provisioned"
    );

    Ok(ProvisionOutcome {
        found_before,
        record,
    })
}

/// Looks up an account by username or email; either may match.
pub async fn fetch_account(
    pool: &PgPool,
    username: &str,
    email: &str,
) -> Result<Option<AccountRecord>, OpsError> {
    let record = sqlx::query_as::<_, AccountRecord>(&format!(
        "SELECT {} FROM users WHERE username = $1 OR email = $2",
        ACCOUNT_COLUMNS
    ))
    .bind(username)
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Promotes the user matching `identifier` (username or email) to `role`,
/// stamping the audit columns. The record is never created here; an unknown
/// identifier is an error.
#[instrument(skip(pool))]
pub async fn promote(
    pool: &PgPool,
    identifier: &str,
    role: UserRole,
    actor: &str,
) -> Result<AccountRecord, OpsError> {
    let record = sqlx::query_as::<_, AccountRecord>(&format!(
        "UPDATE users
         SET role = $2, updated_at = NOW(), updated_by = $3
         WHERE username = $1 OR email = $1
         RETURNING {}",
        ACCOUNT_COLUMNS
    ))
    .bind(identifier)
    .bind(role.as_str())
    .bind(actor)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| OpsError::NotFound(format!("no user matches '{}'", identifier)))?;

    info!(id = record.id, role = %role, "user promoted");
    Ok(record)
}
