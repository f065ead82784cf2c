//! Unit tests for admin chat commands.

mod dispatcher_tests;
mod render_tests;
