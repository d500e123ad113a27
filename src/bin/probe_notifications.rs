use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

use shopops::config::api::ApiConfig;
use shopops::logging::init_tracing;
use shopops::modules::probe::scenarios::{self, MOBILE_LOGIN_PATH, TOKEN_FIELD};
use shopops::modules::probe::service::{Prober, render_results};
use shopops::utils::report::Report;

/// Smoke-test push-notification delivery: health check, mobile login, FCM
/// token registration, then a test push to the logged-in customer's device.
#[derive(Parser)]
#[command(name = "probe-notifications", about = "Probe push-notification delivery")]
struct Args {
    /// Mobile number the customer account logs in with
    #[arg(long)]
    mobile_number: String,

    /// Account password
    #[arg(long)]
    password: String,

    /// FCM device token to register before the test push; registration is
    /// skipped when omitted
    #[arg(long)]
    fcm_token: Option<String>,

    /// Device identifier sent with the FCM registration
    #[arg(long, default_value = "test-device-123")]
    device_id: String,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();
    match run(args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<bool> {
    let config = ApiConfig::from_env();
    let mut prober = Prober::new(config.clone())?;

    let mut report = Report::new();
    report.section("PUSH NOTIFICATION PROBES");
    report.kv("Base URL", &config.base_url);
    report.kv("Mobile", &args.mobile_number);

    let sequence =
        scenarios::notification_sequence(&config, args.fcm_token.as_deref(), &args.device_id);

    // Health first, before login, matching the manual procedure.
    let mut results = prober.run(&sequence[..1]).await;

    let mut login_failed = false;
    let credentials = scenarios::mobile_login_body(&args.mobile_number, &args.password);
    match prober.login(MOBILE_LOGIN_PATH, credentials, TOKEN_FIELD).await {
        Ok(()) => {
            report.ok("Logged in; delivery probes carry a bearer token");
        }
        Err(e) => {
            login_failed = true;
            report.warn(&format!(
                "Login failed; delivery probes will be skipped: {}",
                e
            ));
        }
    }

    results.extend(prober.run(&sequence[1..]).await);

    print!("{}", report.render());
    print!("{}", render_results(&results));

    if !login_failed && results.iter().all(|r| r.outcome.is_success()) {
        println!("\n🎉 Test push accepted — check the device for the notification");
        Ok(true)
    } else {
        Ok(false)
    }
}
