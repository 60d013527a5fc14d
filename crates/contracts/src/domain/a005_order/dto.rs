use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_LINE_QUANTITY: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDto {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: u32,
}

/// Payload for `POST /api/orders`.
///
/// `request_id` is generated once per form so a retried submit does not
/// create a second order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    #[serde(rename = "areaId")]
    pub area_id: String,
    #[serde(rename = "periodId")]
    pub period_id: String,
    pub lines: Vec<OrderLineDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateOrderDto {
    /// Shape checks before sending. Stock, capacity and prices are validated
    /// by the server.
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            bail!("Customer name is required");
        }
        let digits = self
            .customer_phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if digits < 9 {
            bail!("Phone number must contain at least 9 digits");
        }
        if self.area_id.is_empty() {
            bail!("Area is required");
        }
        if self.period_id.is_empty() {
            bail!("Delivery period is required");
        }
        if self.lines.is_empty() {
            bail!("Order has no lines");
        }
        for line in &self.lines {
            if line.product_id.is_empty() {
                bail!("Every line needs a product");
            }
            if line.quantity == 0 || line.quantity > MAX_LINE_QUANTITY {
                bail!(
                    "Quantity must be between 1 and {} (got {})",
                    MAX_LINE_QUANTITY,
                    line.quantity
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateOrderDto {
        CreateOrderDto {
            request_id: Uuid::new_v4(),
            customer_name: "Abdullah".into(),
            customer_phone: "+966 50 123 4567".into(),
            area_id: "riyadh".into(),
            period_id: "p1".into(),
            lines: vec![OrderLineDto {
                product_id: "kabsa".into(),
                quantity: 2,
            }],
            notes: None,
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut dto = valid();
        dto.customer_name = "  ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid();
        dto.customer_phone = "12-34".into();
        assert!(dto.validate().is_err());

        let mut dto = valid();
        dto.period_id.clear();
        let err = dto.validate().unwrap_err();
        assert_eq!(err.to_string(), "Delivery period is required");

        let mut dto = valid();
        dto.lines.clear();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        let mut dto = valid();
        dto.lines[0].quantity = 0;
        assert!(dto.validate().is_err());
        dto.lines[0].quantity = MAX_LINE_QUANTITY;
        assert!(dto.validate().is_ok());
        dto.lines[0].quantity = MAX_LINE_QUANTITY + 1;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case_without_empty_notes() {
        let json = serde_json::to_value(valid()).unwrap();
        assert!(json.get("customerPhone").is_some());
        assert_eq!(json["lines"][0]["productId"], "kabsa");
        assert!(json.get("notes").is_none());
    }
}
