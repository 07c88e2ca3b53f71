//! Order Module
//!
//! - **aggregation**: priced summary of one order (items joined with food,
//!   order and table)
//! - **placement**: place an order with all its items in one transaction
//!
//! # Data Flow
//!
//! ```text
//! POST /orderItems            → OrderPlacement → order + items (transaction)
//! GET  /orderItems-order/{id} → OrderAggregator → [OrderSummary]
//! ```

pub mod aggregation;
pub mod placement;

pub use aggregation::OrderAggregator;
pub use placement::OrderPlacement;
