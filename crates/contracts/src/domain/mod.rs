pub mod a001_area;
pub mod a002_delivery_period;
pub mod a003_category;
pub mod a004_product;
pub mod a005_order;
