//! Label content for select options.
//!
//! A label is a small tree (text, numbers and nested spans such as a trailing
//! badge). Search works on the flattened text of that tree.

/// Renderable label tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// Inline wrapper around nested content, rendered as a `<span>`
    Element {
        class: Option<String>,
        children: Vec<Content>,
    },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn span(class: impl Into<String>, children: Vec<Content>) -> Self {
        Content::Element {
            class: Some(class.into()),
            children,
        }
    }

    /// Children laid out inline without a class
    pub fn row(children: Vec<Content>) -> Self {
        Content::Element {
            class: None,
            children,
        }
    }

    /// Small trailing label, e.g. remaining capacity
    pub fn badge(text: impl Into<String>, modifier: &str) -> Self {
        let class = if modifier.is_empty() {
            "select-badge".to_string()
        } else {
            format!("select-badge select-badge--{}", modifier)
        };
        Content::span(class, vec![Content::text(text)])
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<f64> for Content {
    fn from(value: f64) -> Self {
        Content::Number(value)
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self {
        Content::Number(value as f64)
    }
}

/// Flattens a label tree into plain text.
///
/// Element children are joined with a single space. Never fails: an empty
/// node yields an empty string.
pub fn extract_text(content: &Content) -> String {
    match content {
        Content::Empty => String::new(),
        Content::Text(text) => text.clone(),
        Content::Number(n) => n.to_string(),
        Content::Element { children, .. } => children
            .iter()
            .map(extract_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_roundtrip() {
        for s in ["Riyadh", "", "  spaced  ", "الرياض"] {
            assert_eq!(extract_text(&Content::text(s)), s);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(extract_text(&Content::from(42_i64)), "42");
        assert_eq!(extract_text(&Content::from(2.5)), "2.5");
    }

    #[test]
    fn test_nested_children_joined_with_space() {
        let label = Content::row(vec![
            Content::text("Thu 05 Jun"),
            Content::badge("85%", "limited"),
        ]);
        assert_eq!(extract_text(&label), "Thu 05 Jun 85%");

        let deep = Content::row(vec![
            Content::text("Kabsa"),
            Content::row(vec![Content::text("x"), Content::from(3_i64)]),
        ]);
        assert_eq!(extract_text(&deep), "Kabsa x 3");
    }

    #[test]
    fn test_empty_nodes() {
        assert_eq!(extract_text(&Content::Empty), "");
        assert_eq!(extract_text(&Content::row(vec![])), "");
    }
}
