//! Plugin module tests
//!
//! Covers manifest parsing, archive discovery against real zip
//! fixtures, datapack scanning, and value persistence.

#[cfg(test)]
mod datapack_tests;
#[cfg(test)]
mod discovery_tests;
#[cfg(test)]
mod manifest_tests;
