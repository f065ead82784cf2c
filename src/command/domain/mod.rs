//! Domain model for admin chat commands.

mod command;
mod error;
mod parser;
mod reply;

pub use command::{AdminCommand, CommandKind, ORDER_PAGE_SIZE, PRODUCT_PAGE_SIZE};
pub use error::CommandError;
pub use parser::CommandInvocation;
pub use reply::CommandReply;
