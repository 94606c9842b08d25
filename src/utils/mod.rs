//! Shared helpers.

pub mod exists;
