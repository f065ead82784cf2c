//! Domain model for customer orders.

mod error;
mod ids;
mod order;
mod status;

pub use error::OrderDomainError;
pub use ids::{OrderId, OrderItemId, OrderNumber};
pub use order::{CustomerDetails, NewOrder, NewOrderItem, Order, OrderDetail, OrderFilter, OrderItem};
pub use status::OrderStatus;
