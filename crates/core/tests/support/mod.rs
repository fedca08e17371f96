//! Shared test helpers for `shiftcover-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! planning tests can focus on behaviour instead of boilerplate.

pub mod fixtures;
pub mod repositories;
