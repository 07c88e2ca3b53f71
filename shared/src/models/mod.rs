//! Data models
//!
//! Shared between the server and API clients. Entities are keyed by a
//! generated string id (`food_id`, `menu_id`, ...); timestamps are Unix millis.

pub mod dining_table;
pub mod food;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod summary;
pub mod write_result;

// Re-exports
pub use dining_table::*;
pub use food::*;
pub use menu::*;
pub use order::*;
pub use order_item::*;
pub use summary::*;
pub use write_result::*;
