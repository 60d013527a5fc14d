//! Plain form state of the order-entry screen.

use contracts::domain::a005_order::{CreateOrderDto, OrderLineDto};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct LineDraft {
    /// Stable row key for list rendering
    pub key: u32,
    pub product_id: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    /// Reused across retries until the order is accepted
    pub request_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub area_id: Option<String>,
    pub period_id: Option<String>,
    pub lines: Vec<LineDraft>,
    pub notes: String,
    next_key: u32,
}

impl OrderForm {
    /// Empty form with one blank line
    pub fn new() -> Self {
        let mut form = Self {
            request_id: Uuid::new_v4(),
            customer_name: String::new(),
            customer_phone: String::new(),
            area_id: None,
            period_id: None,
            lines: Vec::new(),
            notes: String::new(),
            next_key: 1,
        };
        form.add_line();
        form
    }

    pub fn add_line(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        self.lines.push(LineDraft {
            key,
            product_id: None,
            quantity: 1,
        });
        key
    }

    /// Removing the last line leaves a fresh blank one.
    pub fn remove_line(&mut self, key: u32) {
        self.lines.retain(|l| l.key != key);
        if self.lines.is_empty() {
            self.add_line();
        }
    }

    pub fn line(&self, key: u32) -> Option<&LineDraft> {
        self.lines.iter().find(|l| l.key == key)
    }

    pub fn set_line_product(&mut self, key: u32, product_id: String) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.product_id = Some(product_id);
        }
    }

    pub fn set_line_quantity(&mut self, key: u32, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.quantity = quantity;
        }
    }

    /// Request body; lines without a product are left out.
    pub fn to_dto(&self) -> CreateOrderDto {
        let notes = self.notes.trim();
        CreateOrderDto {
            request_id: self.request_id,
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            area_id: self.area_id.clone().unwrap_or_default(),
            period_id: self.period_id.clone().unwrap_or_default(),
            lines: self
                .lines
                .iter()
                .filter_map(|l| {
                    l.product_id.as_ref().map(|product_id| OrderLineDto {
                        product_id: product_id.clone(),
                        quantity: l.quantity,
                    })
                })
                .collect(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    /// Validated request body, or the first validation message
    pub fn build_request(&self) -> Result<CreateOrderDto, String> {
        let dto = self.to_dto();
        dto.validate().map_err(|e| e.to_string())?;
        Ok(dto)
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Quantity input; anything unparsable counts as 0 and fails validation
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrderForm {
        let mut form = OrderForm::new();
        form.customer_name = " Sara ".into();
        form.customer_phone = "0501234567".into();
        form.area_id = Some("ruh".into());
        form.period_id = Some("p1".into());
        let first = form.lines[0].key;
        form.set_line_product(first, "kabsa".into());
        form.set_line_quantity(first, 3);
        form
    }

    #[test]
    fn test_new_form_has_one_blank_line() {
        let form = OrderForm::new();
        assert_eq!(form.lines.len(), 1);
        assert_eq!(form.lines[0].quantity, 1);
        assert!(form.lines[0].product_id.is_none());
    }

    #[test]
    fn test_line_keys_are_unique() {
        let mut form = OrderForm::new();
        let a = form.add_line();
        form.remove_line(a);
        let b = form.add_line();
        assert_ne!(a, b);
    }

    #[test]
    fn test_removing_last_line_keeps_a_blank_one() {
        let mut form = OrderForm::new();
        let only = form.lines[0].key;
        form.remove_line(only);
        assert_eq!(form.lines.len(), 1);
        assert_ne!(form.lines[0].key, only);
    }

    #[test]
    fn test_to_dto_trims_and_skips_blank_lines() {
        let mut form = filled();
        form.add_line();
        form.notes = "   ".into();
        let dto = form.to_dto();
        assert_eq!(dto.customer_name, "Sara");
        assert_eq!(dto.lines.len(), 1);
        assert_eq!(dto.lines[0].quantity, 3);
        assert_eq!(dto.notes, None);
        assert_eq!(dto.request_id, form.request_id);
    }

    #[test]
    fn test_build_request() {
        assert!(filled().build_request().is_ok());

        let mut form = filled();
        form.area_id = None;
        assert_eq!(form.build_request().unwrap_err(), "Area is required");

        let mut form = filled();
        let key = form.lines[0].key;
        form.set_line_quantity(key, parse_quantity("abc"));
        assert!(form.build_request().is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("-1"), 0);
        assert_eq!(parse_quantity(""), 0);
    }
}
