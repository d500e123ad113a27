use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;

use shopops::config::database::DatabaseConfig;
use shopops::logging::init_tracing;
use shopops::modules::diagnostics::service::{
    available_partners, orders_ready_for_pickup, readiness_summary, recent_assignments,
};
use shopops::utils::report::Report;

/// Read-only snapshot of the auto-assignment pipeline: delivery partners,
/// orders waiting for pickup, recent assignments, and the readiness counts.
#[derive(Parser)]
#[command(name = "show-assignment-data", about = "Show auto-assignment data")]
struct Args {
    /// How many recent assignments to list
    #[arg(long, default_value_t = 20)]
    limit: i64,
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
    let pool = DatabaseConfig::from_env()
        .connect()
        .await
        .context("connecting to the store")?;

    let partners = available_partners(&pool).await?;
    let orders = orders_ready_for_pickup(&pool).await?;
    let assignments = recent_assignments(&pool, args.limit).await?;
    let summary = readiness_summary(&pool).await?;

    let mut report = Report::new();

    report.section("DELIVERY PARTNERS");
    if partners.is_empty() {
        report.warn("No delivery partners found");
    }
    for partner in &partners {
        report.line(&format!(
            "  [{}] {} {} <{}> online={} available={}",
            partner.id,
            partner.first_name,
            partner.last_name,
            partner.email,
            partner.is_online,
            partner.is_available
        ));
    }

    report.section("ORDERS READY FOR PICKUP");
    if orders.is_empty() {
        report.warn("No orders waiting for assignment");
    }
    for order in &orders {
        report.line(&format!(
            "  {} — {:.2} for {} (created {})",
            order.order_number,
            order.total_amount,
            order.customer_name,
            order.created_at.format("%Y-%m-%d %H:%M")
        ));
    }

    report.section("RECENT ASSIGNMENTS");
    if assignments.is_empty() {
        report.warn("No assignments recorded yet");
    }
    for assignment in &assignments {
        report.line(&format!(
            "  [{}] {} — order {} to {} at {}",
            assignment.id,
            assignment.status,
            assignment.order_number,
            assignment.partner_name,
            assignment.assigned_at.format("%Y-%m-%d %H:%M")
        ));
    }

    report.section("AUTO-ASSIGNMENT READINESS");
    report.kv("Available partners", summary.available_partners);
    report.kv("Orders ready", summary.ready_orders);
    report.kv("Active assignments", summary.active_assignments);
    if summary.is_ready() {
        report.ok("System is ready for auto-assignment");
    } else {
        report.warn("Not ready: needs at least one available partner and one ready order");
    }

    print!("{}", report.render());
    Ok(())
}
