//! Unit tests for the command audit trail.

mod logger_tests;
