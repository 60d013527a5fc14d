use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a001_area::aggregate::Area;

/// Fetch all delivery areas
pub async fn fetch_areas() -> Result<Vec<Area>, ApiError> {
    get_json("/api/areas").await
}
