use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Password;
use dotenvy::dotenv;

use shopops::config::database::DatabaseConfig;
use shopops::logging::init_tracing;
use shopops::modules::provision::model::AccountSpec;
use shopops::modules::provision::service::provision;
use shopops::utils::password::{hash_password, validate_password};
use shopops::utils::report::Report;

/// Create or update the superadmin account in the shop-management store.
///
/// Safe to re-run: a second invocation with the same inputs updates the
/// existing row in place and leaves exactly one superadmin record.
#[derive(Parser)]
#[command(name = "create-superadmin", about = "Create or update the superadmin account")]
struct Args {
    /// Plaintext password; prompted for when neither this nor --password-hash is given
    #[arg(long)]
    password: Option<String>,

    /// Precomputed bcrypt hash, stored as-is
    #[arg(long, conflicts_with = "password")]
    password_hash: Option<String>,

    /// Username of the account
    #[arg(long, default_value = "superadmin")]
    username: String,

    /// Email of the account
    #[arg(long, default_value = "superadmin@shopmanagement.com")]
    email: String,

    /// Audit actor recorded in created_by/updated_by
    #[arg(long, default_value = "system")]
    actor: String,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let password_hash = match (args.password_hash, args.password) {
        (Some(hash), _) => hash,
        (None, password) => {
            let password = password.unwrap_or_else(|| {
                Password::new()
                    .with_prompt("Superadmin password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .expect("Failed to read password")
            });
            validate_password(&password)?;
            hash_password(&password)?
        }
    };

    let mut spec = AccountSpec::superadmin(password_hash);
    spec.username = args.username;
    spec.email = args.email;
    spec.actor = args.actor;

    let pool = DatabaseConfig::from_env()
        .connect()
        .await
        .context("connecting to the store")?;
    let outcome = provision(&pool, &spec).await?;

    let mut report = Report::new();
    report.section("SUPERADMIN PROVISIONING");
    if outcome.found_before {
        report.ok("Existing account updated in place");
    } else {
        report.ok("Account created");
    }
    let record = &outcome.record;
    report.kv("ID", record.id);
    report.kv("Username", &record.username);
    report.kv("Email", &record.email);
    report.kv("Name", format!("{} {}", record.first_name, record.last_name));
    report.kv("Role", &record.role);
    report.kv("Status", &record.status);
    report.kv("Active", record.is_active);
    report.kv("Email Verified", record.email_verified);
    print!("{}", report.render());

    Ok(())
}
