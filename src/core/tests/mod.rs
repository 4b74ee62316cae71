//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Properties line parser tests
//! - Sheet load/render round-trip tests
//! - Validation tests

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod validator_tests;
