use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a002_delivery_period::aggregate::DeliveryPeriod;

/// Fetch delivery periods with their current capacity usage
pub async fn fetch_delivery_periods() -> Result<Vec<DeliveryPeriod>, ApiError> {
    get_json("/api/delivery-periods").await
}
