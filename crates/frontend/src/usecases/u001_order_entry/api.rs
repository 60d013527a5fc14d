use crate::shared::api_utils::{post_json, ApiError};
use contracts::domain::a005_order::{CreateOrderDto, OrderCreated};

pub async fn create_order(dto: &CreateOrderDto) -> Result<OrderCreated, ApiError> {
    post_json("/api/orders", dto).await
}
