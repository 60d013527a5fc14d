//! Searchable dropdown.
//!
//! Everything except `dom` and `view` is DOM-free and unit tested natively:
//! label text extraction, flattening of items/groups, filtering, anchor
//! geometry, outside-click classification and the open/close controller.

pub mod anchor;
pub mod content;
pub mod controller;
pub mod dom;
pub mod filter;
pub mod listeners;
pub mod outside;
pub mod registry;
pub mod view;

pub use content::{extract_text, Content};
pub use filter::filter_options;
pub use registry::{flatten, SelectChild, SelectItem};
pub use view::Select;
