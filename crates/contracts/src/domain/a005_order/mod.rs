pub mod dto;

pub use dto::{CreateOrderDto, OrderCreated, OrderLineDto};
