use serde::{Deserialize, Serialize};

/// Product category (e.g. "Main dishes", "Sweets")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,
}
