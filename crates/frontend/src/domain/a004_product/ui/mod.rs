pub mod picker;

pub use picker::{use_product_catalog, ProductCatalog};
