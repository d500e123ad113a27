use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Delivery partner availability row.
#[derive(Debug, Clone, FromRow)]
pub struct PartnerAvailability {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_online: bool,
    pub is_available: bool,
}

/// Order waiting for a delivery partner.
#[derive(Debug, Clone, FromRow)]
pub struct PendingOrder {
    pub id: i64,
    pub order_number: String,
    pub status: String,
    pub total_amount: f64,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}

/// Assignment row with the order and partner joined in.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentSummary {
    pub id: i64,
    pub status: String,
    pub order_number: String,
    pub partner_name: String,
    pub assigned_at: DateTime<Utc>,
}

/// Counts that gate auto-assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessSummary {
    pub available_partners: i64,
    pub ready_orders: i64,
    pub active_assignments: i64,
}

impl ReadinessSummary {
    /// Auto-assignment can do something only when both sides are populated.
    pub fn is_ready(&self) -> bool {
        self.available_partners > 0 && self.ready_orders > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_requires_partners_and_orders() {
        let mut summary = ReadinessSummary::default();
        assert!(!summary.is_ready());

        summary.available_partners = 3;
        assert!(!summary.is_ready());

        summary.ready_orders = 1;
        assert!(summary.is_ready());
    }
}
