//! Unit tests for the product catalogue.
