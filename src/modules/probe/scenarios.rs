//! Canned probe sequences mirroring the manual smoke tests run against the
//! backend: the order auto-assignment flow and push-notification delivery.

use serde_json::{Value, json};

use crate::config::api::ApiConfig;
use crate::modules::probe::model::ProbeSpec;

/// Field path where the backend's login responses carry the bearer token.
pub const TOKEN_FIELD: &str = "data.token";

/// Admin login endpoint, relative to the API base.
pub const ADMIN_LOGIN_PATH: &str = "/auth/login";

/// Mobile login endpoint, relative to the API base.
pub const MOBILE_LOGIN_PATH: &str = "/mobile/auth/login";

/// Probes for the order auto-assignment flow, in the order the backend team
/// exercises them by hand: list available partners, check readiness, attempt
/// the assignment, then read the assignment history back.
///
/// When `authenticated` is set every probe carries the bearer token; the
/// unauthenticated variant is still useful — the 401s confirm the endpoints
/// are guarded.
pub fn assignment_sequence(order_id: i64, assigned_by: i64, authenticated: bool) -> Vec<ProbeSpec> {
    let mut sequence = vec![
        ProbeSpec::get(
            "available delivery partners",
            "/assignments/available-partners",
        ),
        ProbeSpec::get(
            "auto-assignment readiness",
            format!("/assignments/debug/auto-assignment/{}", order_id),
        ),
        ProbeSpec::post(
            "auto-assign order",
            format!(
                "/assignments/orders/{}/auto-assign?assignedBy={}",
                order_id, assigned_by
            ),
        ),
        ProbeSpec::get(
            "order assignment history",
            format!("/assignments/orders/{}", order_id),
        ),
    ];
    if authenticated {
        sequence = sequence.into_iter().map(ProbeSpec::authenticated).collect();
    }
    sequence
}

/// Probes for push-notification delivery. The FCM registration and the test
/// push both depend on the mobile login; the health check does not.
pub fn notification_sequence(
    config: &ApiConfig,
    fcm_token: Option<&str>,
    device_id: &str,
) -> Vec<ProbeSpec> {
    let mut sequence = vec![ProbeSpec::get(
        "backend health",
        format!("{}/actuator/health", config.server_root()),
    )];
    if let Some(fcm_token) = fcm_token {
        sequence.push(
            ProbeSpec::post("register FCM token", "/customer/notifications/fcm-token")
                .with_body(json!({
                    "fcmToken": fcm_token,
                    "deviceType": "android",
                    "deviceId": device_id,
                }))
                .authenticated(),
        );
    }
    sequence.push(
        ProbeSpec::get("test push delivery", "/customer/notifications/test-push").authenticated(),
    );
    sequence
}

/// Credentials body for the admin login endpoint.
pub fn admin_login_body(identifier: &str, password: &str) -> Value {
    json!({ "identifier": identifier, "password": password })
}

/// Credentials body for the mobile login endpoint.
pub fn mobile_login_body(mobile_number: &str, password: &str) -> Value {
    json!({ "mobileNumber": mobile_number, "password": password })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_sequence_is_ordered_and_parameterized() {
        let sequence = assignment_sequence(42, 7, false);
        assert_eq!(sequence.len(), 4);
        assert!(sequence[1].path.ends_with("/auto-assignment/42"));
        assert!(sequence[2].path.contains("/orders/42/auto-assign"));
        assert!(sequence[2].path.contains("assignedBy=7"));
        assert!(sequence.iter().all(|spec| !spec.requires_auth));

        let authed = assignment_sequence(42, 7, true);
        assert!(authed.iter().all(|spec| spec.requires_auth));
    }

    #[test]
    fn notification_sequence_marks_dependent_probes() {
        let config = ApiConfig::with_base_url("http://localhost:8080/api");
        let sequence = notification_sequence(&config, Some("fcm-abc"), "device-1");
        assert_eq!(sequence.len(), 3);
        assert_eq!(
            sequence[0].path,
            "http://localhost:8080/actuator/health"
        );
        assert!(!sequence[0].requires_auth);
        assert!(sequence[1].requires_auth);
        assert!(sequence[2].requires_auth);

        // Without an FCM token the registration probe is omitted entirely.
        let sequence = notification_sequence(&config, None, "device-1");
        assert_eq!(sequence.len(), 2);
    }
}
