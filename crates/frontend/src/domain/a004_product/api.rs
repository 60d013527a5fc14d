use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a004_product::aggregate::Product;

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/api/products").await
}
