use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;

use shopops::config::database::DatabaseConfig;
use shopops::logging::init_tracing;
use shopops::modules::provision::model::UserRole;
use shopops::modules::provision::service::promote;
use shopops::utils::errors::OpsError;
use shopops::utils::report::Report;

/// Promote a single named user to a new role. The user must already exist;
/// this never creates accounts.
#[derive(Parser)]
#[command(name = "promote-user", about = "Promote an existing user to a new role")]
struct Args {
    /// Username or email of the user to promote
    identifier: String,

    /// Target role (e.g. SUPER_ADMIN, ADMIN, DELIVERY_PARTNER)
    #[arg(long, default_value = "SUPER_ADMIN")]
    role: String,

    /// Audit actor recorded in updated_by
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
    let role = args.role.parse::<UserRole>().map_err(OpsError::Validation)?;

    let pool = DatabaseConfig::from_env()
        .connect()
        .await
        .context("connecting to the store")?;
    let record = promote(&pool, &args.identifier, role, &args.actor).await?;

    let mut report = Report::new();
    report.section("USER PROMOTION");
    report.ok(&format!("'{}' promoted to {}", args.identifier, role));
    report.kv("ID", record.id);
    report.kv("Username", &record.username);
    report.kv("Email", &record.email);
    report.kv("Role", &record.role);
    report.kv("Status", &record.status);
    print!("{}", report.render());

    Ok(())
}
