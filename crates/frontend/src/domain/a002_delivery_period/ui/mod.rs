pub mod list;
pub mod picker;

pub use list::PeriodAvailabilityList;
pub use picker::DeliveryPeriodSelect;
