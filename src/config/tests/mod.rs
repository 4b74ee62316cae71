//! Config module tests
//!
//! Covers manager construction, backup management, and transactional
//! writes against real temporary directories.

#[cfg(test)]
mod manager_tests;
#[cfg(test)]
mod transaction_tests;
