use super::content::extract_text;
use super::registry::SelectItem;

/// Case-insensitive substring filter over option labels.
///
/// An empty query keeps every option. Relative order is preserved.
pub fn filter_options<'a>(options: &'a [SelectItem], query: &str) -> Vec<&'a SelectItem> {
    if query.is_empty() {
        return options.iter().collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|item| extract_text(&item.label).to_lowercase().contains(&needle))
        .collect()
}
