//! Shared helpers for the runnable demos.

pub mod common;
