use crate::domain::a003_category::api::fetch_categories;
use crate::domain::a004_product::api::fetch_products;
use crate::shared::components::ui::select::{SelectChild, SelectItem};
use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::a004_product::aggregate::Product;
use leptos::prelude::*;

fn product_item(product: &Product) -> SelectItem {
    SelectItem::new(product.id.clone(), product.name.clone()).disabled(!product.is_available)
}

/// One group per category (by `sort_order`, then name). Products with no
/// known category go last, ungrouped.
pub fn product_items(categories: &[Category], products: &[Product]) -> Vec<SelectChild> {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));

    let mut out: Vec<SelectChild> = ordered
        .iter()
        .filter_map(|category| {
            let items: Vec<SelectItem> = products
                .iter()
                .filter(|p| p.category_id.as_deref() == Some(category.id.as_str()))
                .map(product_item)
                .collect();
            (!items.is_empty()).then(|| SelectChild::group(category.name.clone(), items))
        })
        .collect();

    out.extend(
        products
            .iter()
            .filter(|p| {
                p.category_id
                    .as_deref()
                    .map_or(true, |id| !categories.iter().any(|c| c.id == id))
            })
            .map(|p| SelectChild::Item(product_item(p))),
    );
    out
}

/// Product options shared by every order line on a page
#[derive(Clone, Copy)]
pub struct ProductCatalog {
    pub items: RwSignal<Vec<SelectChild>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

/// Loads categories and products once and builds the grouped item list.
pub fn use_product_catalog() -> ProductCatalog {
    let catalog = ProductCatalog {
        items: RwSignal::new(Vec::new()),
        error: RwSignal::new(None),
        loading: RwSignal::new(true),
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = match fetch_categories().await {
            Ok(categories) => fetch_products()
                .await
                .map(|products| product_items(&categories, &products)),
            Err(e) => Err(e),
        };
        match result {
            Ok(items) => {
                catalog.items.set(items);
                catalog.error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load product catalog: {}", e);
                catalog.error.set(Some(e.to_string()));
            }
        }
        catalog.loading.set(false);
    });

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::ui::select::flatten;

    fn category(id: &str, name: &str, sort_order: i32) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            sort_order,
        }
    }

    fn product(id: &str, category_id: Option<&str>, available: bool) -> Product {
        Product {
            id: id.into(),
            name: id.to_uppercase(),
            category_id: category_id.map(Into::into),
            is_available: available,
        }
    }

    #[test]
    fn test_grouped_by_category_order() {
        let categories = vec![category("sweets", "Sweets", 2), category("mains", "Mains", 1)];
        let products = vec![
            product("kunafa", Some("sweets"), true),
            product("kabsa", Some("mains"), true),
            product("mandi", Some("mains"), false),
            product("water", None, true),
            product("legacy", Some("deleted-category"), true),
        ];
        let children = product_items(&categories, &products);
        // two groups + two loose items
        assert_eq!(children.len(), 4);

        let flat = flatten(&children);
        let values: Vec<&str> = flat.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["kabsa", "mandi", "kunafa", "water", "legacy"]);
        assert!(flat[1].disabled);
    }

    #[test]
    fn test_empty_categories_skipped() {
        let categories = vec![category("drinks", "Drinks", 0)];
        let children = product_items(&categories, &[product("kabsa", None, true)]);
        assert_eq!(children, vec![SelectChild::Item(product_item(&product("kabsa", None, true)))]);
    }
}
