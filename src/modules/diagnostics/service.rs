use sqlx::PgPool;
use tracing::instrument;

use crate::modules::diagnostics::model::{
    AssignmentSummary, PartnerAvailability, PendingOrder, ReadinessSummary,
};
use crate::utils::errors::OpsError;

/// Delivery partners ordered newest first, with their availability flags.
#[instrument(skip(pool))]
pub async fn available_partners(pool: &PgPool) -> Result<Vec<PartnerAvailability>, OpsError> {
    let partners = sqlx::query_as::<_, PartnerAvailability>(
        "SELECT id, email, first_name, last_name, is_online, is_available
         FROM users
         WHERE role = 'DELIVERY_PARTNER'
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(partners)
}

/// Orders sitting in `READY_FOR_PICKUP`, with the customer name joined in.
#[instrument(skip(pool))]
pub async fn orders_ready_for_pickup(pool: &PgPool) -> Result<Vec<PendingOrder>, OpsError> {
    let orders = sqlx::query_as::<_, PendingOrder>(
        "SELECT o.id, o.order_number, o.status,
                o.total_amount::float8 AS total_amount,
                c.first_name || ' ' || c.last_name AS customer_name,
                o.created_at
         FROM orders o
         JOIN users c ON o.customer_id = c.id
         WHERE o.status = 'READY_FOR_PICKUP'
         ORDER BY o.created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// The most recent assignments, newest first.
#[instrument(skip(pool))]
pub async fn recent_assignments(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<AssignmentSummary>, OpsError> {
    let assignments = sqlx::query_as::<_, AssignmentSummary>(
        "SELECT oa.id, oa.status, o.order_number,
                dp.first_name || ' ' || dp.last_name AS partner_name,
                oa.assigned_at
         FROM order_assignments oa
         JOIN orders o ON oa.order_id = o.id
         JOIN users dp ON oa.delivery_partner_id = dp.id
         ORDER BY oa.assigned_at DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(assignments)
}

/// Counts that gate auto-assignment: partners online and available, orders
/// ready for pickup, and assignments still in flight.
#[instrument(skip(pool))]
pub async fn readiness_summary(pool: &PgPool) -> Result<ReadinessSummary, OpsError> {
    let available_partners: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users
         WHERE role = 'DELIVERY_PARTNER' AND is_online = true AND is_available = true",
    )
    .fetch_one(pool)
    .await?;

    let ready_orders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = 'READY_FOR_PICKUP'")
            .fetch_one(pool)
            .await?;

    let active_assignments: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM order_assignments
         WHERE status IN ('ASSIGNED', 'ACCEPTED', 'PICKED_UP')",
    )
    .fetch_one(pool)
    .await?;

    Ok(ReadinessSummary {
        available_partners,
        ready_orders,
        active_assignments,
    })
}
