//! Flattening of the caller-supplied option tree.

use super::content::Content;

/// One selectable choice
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    /// Equality key, unique within one control
    pub value: String,
    pub label: Content,
    /// Rendered but not choosable
    pub disabled: bool,
}

impl SelectItem {
    pub fn new(value: impl Into<String>, label: impl Into<Content>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Direct child of a select: an item or a non-selectable group of items.
///
/// Items and groups are tagged explicitly, so an item whose label happens to be
/// a nested tree is never mistaken for a group.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectChild {
    Item(SelectItem),
    Group {
        label: Option<String>,
        children: Vec<SelectChild>,
    },
}

impl SelectChild {
    pub fn group(label: impl Into<String>, items: impl IntoIterator<Item = SelectItem>) -> Self {
        SelectChild::Group {
            label: Some(label.into()),
            children: items.into_iter().map(SelectChild::Item).collect(),
        }
    }
}

impl From<SelectItem> for SelectChild {
    fn from(item: SelectItem) -> Self {
        SelectChild::Item(item)
    }
}

fn is_selectable(item: &SelectItem) -> bool {
    !item.value.is_empty()
}

/// Produces the ordered option list with groups spliced in place.
///
/// Groups are opened one level deep; a group nested in a group is skipped.
/// Items without a value are dropped.
pub fn flatten(children: &[SelectChild]) -> Vec<SelectItem> {
    let mut out = Vec::new();
    for child in children {
        match child {
            SelectChild::Item(item) if is_selectable(item) => out.push(item.clone()),
            SelectChild::Item(_) => {}
            SelectChild::Group { children, .. } => {
                out.extend(children.iter().filter_map(|nested| match nested {
                    SelectChild::Item(item) if is_selectable(item) => Some(item.clone()),
                    _ => None,
                }));
            }
        }
    }
    out
}

/// Looks up an option by value in the current list.
pub fn find_by_value<'a>(options: &'a [SelectItem], value: &str) -> Option<&'a SelectItem> {
    options.iter().find(|item| item.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(v: &str) -> SelectItem {
        SelectItem::new(v, v.to_uppercase())
    }

    fn values(items: &[SelectItem]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    #[test]
    fn test_groups_spliced_in_document_order() {
        let children = vec![
            SelectChild::group("G1", [item("a"), item("b")]),
            item("c").into(),
            SelectChild::group("G2", [item("d")]),
        ];
        let flat = flatten(&children);
        assert_eq!(values(&flat), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(flatten(&[]).is_empty());
        assert!(flatten(&[SelectChild::group("empty", Vec::<SelectItem>::new())]).is_empty());
    }

    #[test]
    fn test_items_without_value_are_dropped() {
        let children = vec![
            item("a").into(),
            SelectItem::new("", "no value").into(),
            SelectChild::group("G", [SelectItem::new("", "nested"), item("b")]),
        ];
        assert_eq!(values(&flatten(&children)), vec!["a", "b"]);
    }

    #[test]
    fn test_nested_groups_are_not_opened() {
        let children = vec![SelectChild::Group {
            label: None,
            children: vec![
                item("a").into(),
                SelectChild::group("inner", [item("hidden")]),
            ],
        }];
        assert_eq!(values(&flatten(&children)), vec!["a"]);
    }

    #[test]
    fn test_composite_label_stays_an_item() {
        let label = Content::row(vec![Content::text("Kabsa"), Content::badge("new", "")]);
        let children = vec![SelectChild::Item(SelectItem::new("kabsa", label.clone()))];
        let flat = flatten(&children);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].label, label);
    }

    #[test]
    fn test_find_by_value() {
        let flat = flatten(&[item("a").into(), item("b").into()]);
        assert_eq!(find_by_value(&flat, "b").map(|i| i.value.as_str()), Some("b"));
        assert!(find_by_value(&flat, "z").is_none());
    }
}
