pub mod picker;

pub use picker::AreaSelect;
