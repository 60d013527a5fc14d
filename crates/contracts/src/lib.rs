//! Shared DTOs for the catering admin front-end.
//!
//! These mirror the JSON returned by the order-management API. The front-end
//! only displays what the server computed; no pricing or capacity rules live
//! here.

pub mod domain;
