pub mod u001_order_entry;
