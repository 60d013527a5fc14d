use serde::{Deserialize, Serialize};

/// Delivery area (district) the kitchen ships to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(rename = "nameAr", default)]
    pub name_ar: Option<String>,
    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Area {
    /// Name as shown in pickers: "Riyadh (الرياض)" when an Arabic name exists.
    pub fn display_name(&self) -> String {
        match self.name_ar.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(ar) => format!("{} ({})", self.name, ar),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_to_active() {
        let area: Area = serde_json::from_str(r#"{"id":"a1","name":"Riyadh"}"#).unwrap();
        assert!(area.is_active);
        assert_eq!(area.name_ar, None);
    }

    #[test]
    fn test_display_name() {
        let mut area = Area {
            id: "a1".into(),
            name: "Riyadh".into(),
            name_ar: Some("الرياض".into()),
            is_active: true,
        };
        assert_eq!(area.display_name(), "Riyadh (الرياض)");

        area.name_ar = Some("  ".into());
        assert_eq!(area.display_name(), "Riyadh");
    }
}
