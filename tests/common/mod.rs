//! Common test utilities for planbridge integration tests
//!
//! Plan fixtures (hand-written and randomly generated) and a tracing
//! subscriber that writes through the test harness.

#![allow(dead_code)]

pub mod plans;

pub use plans::{chain_plan, nested_suite, random_plan, RandomPlanConfig};

/// Route `tracing` output through the test writer; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
