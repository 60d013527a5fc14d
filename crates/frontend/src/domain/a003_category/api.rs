use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a003_category::aggregate::Category;

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/api/categories").await
}
