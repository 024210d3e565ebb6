//! Single test binary entry point.
//!
//! Structure:
//! - integration: Multi-step drag workflows through the store
//! - unit: Single-component unit tests

mod unit;
