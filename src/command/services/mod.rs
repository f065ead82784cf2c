//! Command dispatch and reply rendering.

mod dispatcher;
mod render;

pub use dispatcher::CommandDispatcher;
pub use render::help_text;
pub(crate) use render::render_committed;
