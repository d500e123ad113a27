use anyhow::Result;
use clap::Parser;
use dialoguer::Password;

use shopops::logging::init_tracing;
use shopops::utils::errors::OpsError;
use shopops::utils::password::{hash_password, validate_password, verify_password};
use shopops::utils::report::Report;

/// Generate a bcrypt hash the backend's login verifier accepts.
#[derive(Parser)]
#[command(
    name = "generate-password-hash",
    about = "Generate a bcrypt password hash for the backend"
)]
struct Args {
    /// Password to hash; prompted for when omitted
    password: Option<String>,
}

fn main() {
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let password = args.password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    validate_password(&password)?;
    let hashed = hash_password(&password)?;

    // Self-check against the same verifier the backend runs at login.
    if !verify_password(&password, &hashed)? {
        return Err(OpsError::Verification(
            "generated hash failed its self-check".to_string(),
        )
        .into());
    }

    let mut report = Report::new();
    report.section("PASSWORD HASH");
    report.kv("Hash", &hashed);
    report.ok("Hash verifies against the input password");
    print!("{}", report.render());

    Ok(())
}
