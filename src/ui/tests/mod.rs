//! UI module tests
//!
//! The Controller carries all testable logic; widget behaviour is
//! exercised manually since it needs a display.

#[cfg(test)]
mod controller_tests;
#[cfg(test)]
mod watcher_tests;
