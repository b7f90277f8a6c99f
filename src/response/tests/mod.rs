//! Unit tests for the response subsystem.

mod handler_tests;
